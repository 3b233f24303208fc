// wr-core/src/units.rs

use uom::si::f64::{Area as UomArea, Length as UomLength, Volume as UomVolume};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;
pub type Volume = UomVolume;

/// Rainfall depth in millimetres.
#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

/// Volume expressed in litres.
#[inline]
pub fn as_litres(v: Volume) -> f64 {
    use uom::si::volume::liter;
    v.get::<liter>()
}

/// Volume of water standing `depth` deep over `area`.
///
/// One millimetre over one square metre is one litre.
#[inline]
pub fn depth_over_area(depth: Length, area: Area) -> Volume {
    depth * area
}
