mod commerce_tests;
