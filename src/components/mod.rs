//! ECS components for entities.
//!
//! Submodules overview:
//! - [`inputcontrolled`] – keyboard-driven movement intent
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`player`] – marker for the camera-followed avatar
//! - [`rigidbody`] – kinematic body storing velocity

pub mod inputcontrolled;
pub mod mapposition;
pub mod player;
pub mod rigidbody;
