pub mod api;
pub mod delimiters;
pub mod errors;
pub mod icons;
pub mod instructions;
pub mod preview;
pub mod prompt;
pub mod scaffold;
pub mod site;
pub mod template;
pub mod theme;
pub mod tree;
