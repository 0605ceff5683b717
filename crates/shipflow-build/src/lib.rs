//! shipflow image build & publish
//!
//! This crate provides the two stages of the shipflow pipeline:
//! rendering the build recipe and building the local image, then
//! logging in to the registry, re-tagging and pushing the image.

pub mod builder;
pub mod credential;
pub mod docker;
pub mod engine;
pub mod error;
pub mod publisher;
pub mod recipe;
pub mod reference;
pub mod status;

pub use builder::ImageBuilder;
pub use credential::Credential;
pub use docker::CliEngine;
pub use engine::ContainerEngine;
pub use error::{BuildError, BuildResult, Step};
pub use publisher::ImagePublisher;
pub use recipe::Recipe;
pub use reference::{ImageRef, local_image, remote_image};
pub use status::{ImageStatus, inspect_images};
