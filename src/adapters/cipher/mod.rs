pub mod pgp_backend;
