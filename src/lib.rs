//! # imagineui
//!
//! A localized parser for the imagineui scene language.
//!
//! Scenes describe wireframes in near-natural language:
//!
//! ```text
//! Mobile screen: Login
//! Block: Form
//!     Field "E-mail"
//!     Button "Sign in"
//! ```
//!
//! File Layout
//!
//! All the functionality lives under [scene]:
//! src/scene
//!   ├── locales     Keyword dictionaries and locale detection
//!   ├── lexing      Token set generation and the lexer
//!   ├── parsing     The recursive descent parser
//!   ├── cst         Concrete syntax tree types
//!   ├── views       Derived views over the CST used by layout code
//!   └── formats     Serializers (json, yaml, treeviz, tokens, scene)
//!
//! The usual entry point is [scene::parse_scene_to_ast], or
//! [scene::SceneProcessor] when configuration is involved.
//!
//! For test helpers and sample scenes, see the [testing module](scene::testing).

pub mod scene;
