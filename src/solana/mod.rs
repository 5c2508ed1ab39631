pub mod data_source;
pub mod tokens;
pub mod utils;
pub mod wallet;

// Re-export commonly used items
pub use data_source::{MockPortfolioDataSource, PortfolioDataSource};
pub use tokens::constants::{USDC_MINT, USDT_MINT};
pub use utils::{lamports_to_sol, LAMPORTS_PER_SOL};
pub use wallet::{parse_pubkey, shorten_address};
