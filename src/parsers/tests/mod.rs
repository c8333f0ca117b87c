mod section_tests;
