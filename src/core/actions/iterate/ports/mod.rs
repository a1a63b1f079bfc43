pub mod iteration_backend;
