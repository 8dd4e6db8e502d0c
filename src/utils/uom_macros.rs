#![warn(missing_docs)]
//! Module for additional uom macros that facilitate the creation of lengths and profile points
/// helper macro to create the units
#[macro_export]
macro_rules! uom_unit_creator {

    ($unit:ident, $unit_type:ident, $val1:expr) => {
        $unit_type::new::<$unit>($val1)
    };
    ($unit:ident, $unit_type:ident, $val1:expr, $val2:expr, $val3:expr) => {
        {
        use nalgebra::Point3;
        Point3::new(
            $unit_type::new::<$unit>($val1),
            $unit_type::new::<$unit>($val2),
            $unit_type::new::<$unit>($val3))
        }
    };
}

///macro to create a Length in millimeter
#[macro_export]
macro_rules! millimeter {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::millimeter};
        $crate::uom_unit_creator![millimeter, Length, $( $x ),*]
    }};
}
