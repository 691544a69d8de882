pub mod dump_traj;
