pub mod config;
pub mod logging;

// Re-export the public surface of the member crates
pub use blockmine_core::{ensure, Elapsed, Error, Grammar, Result, Timer};
pub use blockmine_parser::{
    binding_for, block_text, collect_blocks_of_interest, collect_tree_blocks_of_interest,
    count_blocks_of_interest, ensure_node, first_error_node, node_location, parse_file,
    parse_file_detect, parse_str, Candidate, CodeBlocks, GrammarBinding, ManagedTree, Node,
    SourceParser,
};
pub use config::{BlockmineConfig, ConfigError};
