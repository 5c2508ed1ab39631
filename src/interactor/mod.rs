pub mod portfolio_interactor;
pub mod portfolio_normalizer;

pub use portfolio_interactor::{PortfolioInteractor, PortfolioInteractorImpl};
pub use portfolio_normalizer::{normalize, to_ui_amount};
