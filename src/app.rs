use dioxus::prelude::*;
use portfolio_core::PortfolioContent;

use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the content context, then renders the single
/// portfolio page. All interactive sections hang off `Home`.
#[component]
pub fn App() -> Element {
    // Content is resolved once at startup; sections read it from context
    let content: Signal<PortfolioContent> = use_signal(crate::get_content);
    use_context_provider(|| content);

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}

/// Hook to access the portfolio content from context.
pub fn use_portfolio_content() -> Signal<PortfolioContent> {
    use_context()
}
