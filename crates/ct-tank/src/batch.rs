//! Parallel sizing of independent design points.

use crate::error::TankResult;
use crate::spec::{MassProperties, TankSpec};
use rayon::prelude::*;
use tracing::debug;

/// Size every tank in `specs`, one result per tank in input order.
///
/// Tanks share nothing mutable, so each runs on its own rayon task. Property
/// records may be shared between tanks since they are only read.
pub fn size_all(specs: &mut [TankSpec<'_>]) -> Vec<TankResult<MassProperties>> {
    debug!(count = specs.len(), "sizing tank batch");
    specs
        .par_iter_mut()
        .map(|spec| spec.calculate_all())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TankError;
    use ct_core::units::{j_per_kg, k, kg_per_m3, kgps, m, mpa, pa, w_per_m_k};
    use ct_materials::{Propellant, SolidMaterial};

    #[test]
    fn batch_matches_serial_and_keeps_order() {
        let fuel = Propellant::new("LOX", kg_per_m3(1141.0), j_per_kg(213_100.0), k(90.19));
        let wall = SolidMaterial::new("SS", kg_per_m3(8000.0), w_per_m_k(16.2))
            .with_yield_tensile_strength(mpa(215.0));
        let ins = SolidMaterial::new("foam", kg_per_m3(35.0), w_per_m_k(0.02));

        let make = |l: f64, p: f64| {
            TankSpec::new(format!("L={l}"), m(1.5), m(l))
                .with_design_pressure(pa(p))
                .with_design_boiloff_rate(kgps(5e-3))
                .with_temperature_outer(k(290.0))
                .with_fuel(&fuel)
                .with_structural_material(&wall)
                .with_insulation_material(&ins)
        };

        let mut specs = vec![make(1.5, 3e5), make(3.0, 3e5), make(4.0, 1e9), make(6.0, 3e5)];
        let results = size_all(&mut specs);
        assert_eq!(results.len(), 4);
        assert!(matches!(results[2], Err(TankError::Infeasible { .. })));

        for (i, result) in results.iter().enumerate() {
            if i == 2 {
                continue;
            }
            let mut serial = make(specs[i].length_internal.value, 3e5);
            let expected = serial.calculate_all().unwrap();
            assert_eq!(result.as_ref().unwrap(), &expected);
            assert!(specs[i].is_sized());
        }
    }
}
