mod holes_tests;
mod boundary_tests;
