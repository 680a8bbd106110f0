//! Utility functions for image processing
//!
//! This module provides helper functions for QR code detection:
//! - Binarization (Otsu's method and local-mean adaptive threshold)
//! - Geometry (perspective transforms)
//! - Scan buffer (reusable pixel storage for a decoding context)

/// Grayscale to binary thresholding
pub mod binarization;
/// Perspective transforms
pub mod geometry;
/// Scan buffer storage
pub mod scan_buffer;
