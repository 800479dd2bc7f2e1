mod favorites_tests;
mod property_tests;
