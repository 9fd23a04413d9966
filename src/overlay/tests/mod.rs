mod compositor_tests;
