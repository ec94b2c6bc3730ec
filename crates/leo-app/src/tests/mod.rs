mod batch_tests;
mod input_tests;
