//! Motor de reglas de asignación
//!
//! Las cinco operaciones que mueven a un efectivo entre sus tres estados:
//! disponible, sentado en un (vehículo, slot), o coordinador (CORG).
//! Invariantes que este módulo garantiza:
//!
//! - a lo sumo un efectivo por par (vehículo, slot),
//! - a lo sumo un CORG en todo el sistema,
//! - CORG y asiento son mutuamente excluyentes,
//! - `is_available` es true exactamente cuando no hay asiento ni rol CORG.
//!
//! Cada operación valida todo antes de mutar nada: un fallo nunca deja
//! estado parcial observable.

use tracing::info;

use crate::models::{Officer, SEATS_PER_VEHICLE};
use crate::storage::MemStorage;
use crate::utils::errors::{AppError, AppResult};

/// Sienta a un efectivo en el slot 1 o 2 de un vehículo.
///
/// Falla con NotFound si el efectivo o el vehículo no existen, y con
/// SlotOccupied si *otro* efectivo ya ocupa ese par (vehículo, slot). Nunca
/// desaloja al ocupante: eso es un fallo de precondición, no un swap
/// implícito. Si el efectivo era CORG, pierde el rol al sentarse.
pub fn assign_officer_to_vehicle(
    store: &mut MemStorage,
    officer_id: i32,
    vehicle_id: i32,
    slot_number: i32,
) -> AppResult<Officer> {
    if !(1..=SEATS_PER_VEHICLE).contains(&slot_number) {
        return Err(AppError::BadRequest(format!(
            "Slot number must be 1 or 2, got {}",
            slot_number
        )));
    }

    if store.officer(officer_id).is_none() {
        return Err(AppError::NotFound(format!(
            "Officer with id {} not found",
            officer_id
        )));
    }
    if store.vehicle(vehicle_id).is_none() {
        return Err(AppError::NotFound(format!(
            "Vehicle with id {} not found",
            vehicle_id
        )));
    }

    if let Some(occupant) = store.seat_holder(vehicle_id, slot_number) {
        if occupant.id != officer_id {
            return Err(AppError::SlotOccupied(format!(
                "Slot {} in vehicle {} is already occupied",
                slot_number, vehicle_id
            )));
        }
    }

    let officer = store
        .officer_mut(officer_id)
        .ok_or_else(|| AppError::Internal("officer vanished during assignment".to_string()))?;
    officer.is_available = false;
    officer.is_corg = false;
    officer.vehicle_id = Some(vehicle_id);
    officer.slot_number = Some(slot_number);
    let officer = officer.clone();

    info!(
        "👮 {} asignado al vehículo {} (slot {})",
        officer.name, vehicle_id, slot_number
    );
    Ok(officer)
}

/// Baja a un efectivo de su vehículo y lo deja disponible.
///
/// Idempotente sobre los campos de vehículo: si el efectivo existe pero no
/// está sentado, igual queda disponible y sin rol CORG.
pub fn remove_officer_from_vehicle(store: &mut MemStorage, officer_id: i32) -> AppResult<Officer> {
    let officer = store
        .officer_mut(officer_id)
        .ok_or_else(|| AppError::NotFound(format!("Officer with id {} not found", officer_id)))?;

    officer.is_available = true;
    officer.is_corg = false;
    officer.vehicle_id = None;
    officer.slot_number = None;
    let officer = officer.clone();

    info!("👮 {} bajado de su vehículo, vuelve a disponible", officer.name);
    Ok(officer)
}

/// Designa al coordinador (CORG).
///
/// Transferencia en un solo paso: primero se valida el destino y recién
/// entonces se degrada al CORG vigente (si hay) y se promueve al nuevo. Un
/// destino inexistente falla con NotFound sin tocar al vigente. El nuevo
/// CORG pierde cualquier asiento que tuviera.
pub fn assign_corg(store: &mut MemStorage, officer_id: i32) -> AppResult<Officer> {
    if store.officer(officer_id).is_none() {
        return Err(AppError::NotFound(format!(
            "Officer with id {} not found",
            officer_id
        )));
    }

    remove_corg(store);

    let officer = store
        .officer_mut(officer_id)
        .ok_or_else(|| AppError::Internal("officer vanished during CORG transfer".to_string()))?;
    officer.is_available = false;
    officer.is_corg = true;
    officer.vehicle_id = None;
    officer.slot_number = None;
    let officer = officer.clone();

    info!("📻 {} designado como CORG", officer.name);
    Ok(officer)
}

/// Retira al CORG vigente, si hay. Nunca falla.
pub fn remove_corg(store: &mut MemStorage) {
    if let Some(corg) = store.corg_mut() {
        corg.is_available = true;
        corg.is_corg = false;
        info!("📻 {} deja el rol de CORG", corg.name);
    }
}

/// El CORG vigente, o None si el rol está vacante.
pub fn corg(store: &MemStorage) -> Option<Officer> {
    store.corg().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::officer_dto::CreateOfficerRequest;
    use crate::dto::vehicle_dto::CreateVehicleRequest;
    use crate::models::VehicleStatus;

    fn store_with(officers: usize, vehicles: usize) -> MemStorage {
        let mut store = MemStorage::new();
        for i in 0..officers {
            store.create_officer(CreateOfficerRequest {
                name: format!("Officer {}", i + 1),
                badge: format!("Badge #{}", 1234 + i),
                initials: "OF".to_string(),
                is_available: true,
                is_corg: false,
                vehicle_id: None,
                slot_number: None,
            });
        }
        for i in 0..vehicles {
            store.create_vehicle(CreateVehicleRequest {
                call_sign: format!("Unité {}", i + 1),
                license: format!("VH-00{}-GP", i + 1),
                status: VehicleStatus::Disponible,
            });
        }
        store
    }

    fn assert_exactly_one_location_state(officer: &Officer) {
        let seated = officer.vehicle_id.is_some();
        let states = [officer.is_available, officer.is_corg, seated];
        assert_eq!(
            states.iter().filter(|s| **s).count(),
            1,
            "officer {} violates the one-location invariant: {:?}",
            officer.id,
            officer
        );
        assert_eq!(officer.vehicle_id.is_some(), officer.slot_number.is_some());
    }

    #[test]
    fn assign_seats_officer_and_clears_availability() {
        let mut store = store_with(1, 1);
        let officer = assign_officer_to_vehicle(&mut store, 1, 1, 1).unwrap();

        assert!(!officer.is_available);
        assert!(!officer.is_corg);
        assert_eq!(officer.vehicle_id, Some(1));
        assert_eq!(officer.slot_number, Some(1));
        assert_exactly_one_location_state(&officer);
    }

    #[test]
    fn assign_fails_when_officer_missing() {
        let mut store = store_with(0, 1);
        let err = assign_officer_to_vehicle(&mut store, 7, 1, 1).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn assign_fails_when_vehicle_missing() {
        let mut store = store_with(1, 0);
        let err = assign_officer_to_vehicle(&mut store, 1, 7, 1).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn assign_rejects_slot_out_of_range() {
        let mut store = store_with(1, 1);
        let err = assign_officer_to_vehicle(&mut store, 1, 1, 3).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(store.officer(1).unwrap().is_available);
    }

    #[test]
    fn occupied_slot_fails_and_leaves_both_officers_unchanged() {
        let mut store = store_with(2, 1);
        assign_officer_to_vehicle(&mut store, 1, 1, 1).unwrap();

        let err = assign_officer_to_vehicle(&mut store, 2, 1, 1).unwrap_err();
        assert!(matches!(err, AppError::SlotOccupied(_)));

        let occupant = store.officer(1).unwrap();
        assert!(occupant.seated_in(1, 1));
        let rejected = store.officer(2).unwrap();
        assert!(rejected.is_available);
        assert_eq!(rejected.vehicle_id, None);
    }

    #[test]
    fn reassigning_same_officer_to_their_own_slot_is_not_occupied() {
        let mut store = store_with(1, 1);
        assign_officer_to_vehicle(&mut store, 1, 1, 1).unwrap();
        let officer = assign_officer_to_vehicle(&mut store, 1, 1, 1).unwrap();
        assert!(officer.seated_in(1, 1));
    }

    #[test]
    fn second_slot_of_same_vehicle_stays_free() {
        let mut store = store_with(2, 1);
        assign_officer_to_vehicle(&mut store, 1, 1, 1).unwrap();
        let second = assign_officer_to_vehicle(&mut store, 2, 1, 2).unwrap();
        assert!(second.seated_in(1, 2));
    }

    #[test]
    fn remove_resets_seated_officer_to_available() {
        let mut store = store_with(1, 1);
        assign_officer_to_vehicle(&mut store, 1, 1, 2).unwrap();

        let officer = remove_officer_from_vehicle(&mut store, 1).unwrap();
        assert!(officer.is_available);
        assert_eq!(officer.vehicle_id, None);
        assert_eq!(officer.slot_number, None);
        assert_exactly_one_location_state(&officer);
    }

    #[test]
    fn remove_is_a_safe_noop_for_unseated_officer() {
        let mut store = store_with(1, 0);
        let officer = remove_officer_from_vehicle(&mut store, 1).unwrap();
        assert!(officer.is_available);
        assert!(!officer.is_corg);
    }

    #[test]
    fn remove_fails_when_officer_missing() {
        let mut store = store_with(0, 0);
        let err = remove_officer_from_vehicle(&mut store, 1).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn assign_corg_displaces_previous_holder_in_one_step() {
        let mut store = store_with(2, 0);
        assign_corg(&mut store, 1).unwrap();
        let new_corg = assign_corg(&mut store, 2).unwrap();

        assert!(new_corg.is_corg);
        let former = store.officer(1).unwrap();
        assert!(former.is_available);
        assert!(!former.is_corg);
        assert_eq!(store.officers().iter().filter(|o| o.is_corg).count(), 1);
    }

    #[test]
    fn assign_corg_clears_vehicle_seat() {
        let mut store = store_with(1, 1);
        assign_officer_to_vehicle(&mut store, 1, 1, 1).unwrap();

        let officer = assign_corg(&mut store, 1).unwrap();
        assert!(officer.is_corg);
        assert!(!officer.is_available);
        assert_eq!(officer.vehicle_id, None);
        assert_eq!(officer.slot_number, None);
        assert_exactly_one_location_state(&officer);
    }

    #[test]
    fn assign_corg_to_missing_officer_keeps_incumbent() {
        let mut store = store_with(1, 0);
        assign_corg(&mut store, 1).unwrap();

        let err = assign_corg(&mut store, 42).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(corg(&store).unwrap().id, 1);
    }

    #[test]
    fn remove_corg_resets_holder_and_is_noop_when_vacant() {
        let mut store = store_with(1, 0);
        assign_corg(&mut store, 1).unwrap();

        remove_corg(&mut store);
        let officer = store.officer(1).unwrap();
        assert!(officer.is_available);
        assert!(!officer.is_corg);
        assert!(corg(&store).is_none());

        // rol vacante: no falla, no cambia nada
        remove_corg(&mut store);
        assert!(corg(&store).is_none());
    }

    #[test]
    fn full_lifecycle_scenario() {
        // create V1 + O1, assign O1→(V1,1), promote to CORG, then retire
        let mut store = store_with(1, 1);

        let o1 = assign_officer_to_vehicle(&mut store, 1, 1, 1).unwrap();
        assert!(!o1.is_available);
        assert_eq!(o1.vehicle_id, Some(1));
        assert_eq!(o1.slot_number, Some(1));

        let o1 = assign_corg(&mut store, 1).unwrap();
        assert!(!o1.is_available);
        assert!(o1.is_corg);
        assert_eq!(o1.vehicle_id, None);
        assert_eq!(o1.slot_number, None);

        remove_corg(&mut store);
        let o1 = store.officer(1).unwrap();
        assert!(o1.is_available);
        assert!(!o1.is_corg);
        assert_exactly_one_location_state(o1);
    }
}
