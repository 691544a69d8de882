//! LAMMPS-style trajectory dumps, so external tools can render a run.

use std::{
    fs::File,
    io::{BufWriter, Result, Write},
};

use crate::atoms::Atom;

pub struct DumpTraj {
    out: BufWriter<File>,
}

impl DumpTraj {
    pub fn new(path: &str) -> Result<Self> {
        let file = File::create(path)?;
        Ok(DumpTraj {
            out: BufWriter::new(file),
        })
    }

    pub fn write_timestep(&mut self, step: u64) -> Result<()> {
        writeln!(self.out, "ITEM: TIMESTEP")?;
        writeln!(self.out, "{}", step)?;
        Ok(())
    }

    pub fn write_natoms(&mut self, n_atoms: usize) -> Result<()> {
        writeln!(self.out, "ITEM: NUMBER OF ATOMS")?;
        writeln!(self.out, "{}", n_atoms)?;
        Ok(())
    }

    pub fn write_bounds(&mut self, box_length: f64) -> Result<()> {
        writeln!(self.out, "ITEM: BOX BOUNDS pp pp pp")?;
        for _ in 0..3 {
            writeln!(self.out, "{} {}", 0.0, box_length)?;
        }
        Ok(())
    }

    pub fn write_atoms_info(&mut self, atoms: &[Atom]) -> Result<()> {
        writeln!(self.out, "ITEM: ATOMS id type x y z")?;
        for (i, atom) in atoms.iter().enumerate() {
            writeln!(
                self.out,
                "{} 1 {} {} {}",
                i + 1,
                atom.r[0],
                atom.r[1],
                atom.r[2]
            )?;
        }
        Ok(())
    }

    pub fn write_step(&mut self, atoms: &[Atom], box_length: f64, step: u64) -> Result<()> {
        self.write_timestep(step)?;
        self.write_natoms(atoms.len())?;
        self.write_bounds(box_length)?;
        self.write_atoms_info(atoms)?;
        Ok(())
    }
}
