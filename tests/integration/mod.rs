//! Integration tests for the inimerge configuration merge tool

mod cli_binary;
