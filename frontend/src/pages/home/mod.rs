mod panel;

pub use panel::HomePage;
