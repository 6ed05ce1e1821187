//! Identifier for editing surfaces.
//!
//! A plain `u64` keeps this independent of any widget toolkit's handle type.
//! Integration layers provide `From` implementations for their native IDs.

/// Opaque identifier for an editing surface.
///
/// Two surface values with the same `SurfaceId` are treated as the same
/// surface by the [`KeyDispatcher`](crate::KeyDispatcher).
///
/// # Integration
///
/// ```ignore
/// use surface::SurfaceId;
///
/// impl From<WidgetId> for SurfaceId {
///     fn from(id: WidgetId) -> Self {
///         SurfaceId::from_raw(id.0 as u64)
///     }
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Create a `SurfaceId` from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for SurfaceId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<u32> for SurfaceId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}

impl From<SurfaceId> for u64 {
    #[inline]
    fn from(id: SurfaceId) -> Self {
        id.as_raw()
    }
}
