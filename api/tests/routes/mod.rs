mod health_test;
mod modules;
