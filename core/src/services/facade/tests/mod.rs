mod amenities_tests;
mod support;
