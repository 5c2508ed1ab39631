//! Portfolio dashboard core for a connected Solana wallet.
//!
//! Raw balances come from a [`PortfolioDataSource`], get normalized into a
//! [`PortfolioSnapshot`] and are exposed to a [`DashboardView`] through the
//! [`PortfolioPresenter`] state machine.
pub mod config;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod solana;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use config::Config;
pub use di::*;
pub use entity::*;
pub use interactor::*;
pub use presenter::*;
pub use solana::*;
pub use utils::*;
pub use view::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
