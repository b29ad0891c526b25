//! Proptest generators for property-based testing.

use proptest::prelude::*;

use identicon_core::{Color, Digest, GridGeometry, Identicon};

/// Generate an arbitrary key.
pub fn key() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=64)
}

/// Generate a row count whose half-grid fits in a digest.
pub fn row_count() -> impl Strategy<Value = u32> {
    1u32..=21
}

/// Generate a random digest.
pub fn digest() -> impl Strategy<Value = Digest> {
    any::<[u8; 32]>().prop_map(Digest::from_bytes)
}

/// Generate a random color.
pub fn color() -> impl Strategy<Value = Color> {
    any::<[u8; 3]>().prop_map(Color::from)
}

/// Generate a valid geometry with a side of at most `max_side` pixels.
pub fn geometry(max_side: u32) -> impl Strategy<Value = GridGeometry> {
    row_count()
        .prop_flat_map(move |rows| (rows..=max_side.max(rows), Just(rows)))
        .prop_filter_map("valid geometry", |(side, rows)| {
            GridGeometry::new(side, rows).ok()
        })
}

/// Parameters for generating an identicon.
#[derive(Debug, Clone)]
pub struct IdenticonParams {
    pub side: u32,
    pub row_count: u32,
    pub key: Vec<u8>,
}

impl IdenticonParams {
    pub fn build(&self) -> Identicon {
        Identicon::new(self.side, self.row_count, &self.key)
            .expect("generated params are always valid")
    }
}

impl Arbitrary for IdenticonParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (geometry(160), key())
            .prop_map(|(geometry, key)| IdenticonParams {
                side: geometry.side(),
                row_count: geometry.row_count(),
                key,
            })
            .boxed()
    }
}
