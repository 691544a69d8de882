pub mod lennard_jones;
