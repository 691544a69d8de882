mod args_parser;

use anyhow::Result;
use clap::Parser;

use argonmd::system::{System, SystemConfig};
use argonmd::writers::dump_traj::DumpTraj;
use args_parser::Args;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = SystemConfig {
        supercell_count: args.supercell,
        lattice_scale: args.scale,
        temperature: args.temperature,
        ensemble: args.ensemble.into(),
        temp_control: args.thermostat.into(),
        seed: args.seed,
    };
    let mut system = System::new(config)?;

    let mut dumper = match args.dump.as_deref() {
        Some(path) => Some(DumpTraj::new(path)?),
        None => None,
    };

    log::info!(
        "{} atoms, box {:.3} nm, target {:.1} K",
        system.atom_count(),
        system.box_length_nm(),
        system.target_temperature_kelvin()
    );

    for i in 1..=args.steps {
        system.step();

        if let Some(dumper) = dumper.as_mut() {
            dumper.write_step(system.atoms(), system.box_length(), i)?;
        }

        if i % args.log_every == 0 {
            println!(
                "{} {:.6} {:.6} {:.6} {:.3} {:.3}",
                i,
                system.potential_energy_hartree(),
                system.kinetic_energy_hartree(),
                system.total_energy_hartree(),
                system.measured_temperature_kelvin(),
                system.pressure_atm()
            );
        }
    }

    Ok(())
}
