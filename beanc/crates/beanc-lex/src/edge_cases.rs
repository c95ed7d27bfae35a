//! Edge case tests for beanc-lex
