pub mod portfolio_presenter;

pub use portfolio_presenter::{PortfolioPresenter, PortfolioPresenterImpl, FETCH_ERROR_MESSAGE};
