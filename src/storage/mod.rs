//! Entity Store en memoria
//!
//! `MemStorage` es el dueño de las colecciones de efectivos y vehículos. Los
//! identificadores son enteros positivos asignados por el servidor: arrancan
//! en 1, crecen de a uno por tipo de entidad y nunca se reutilizan, ni
//! siquiera después de un delete. Las colecciones son `BTreeMap` con clave en
//! el id monotónico, así el listado sale en orden de inserción sin llevar una
//! lista aparte.
//!
//! Acá vive solo el CRUD; las reglas de asignación están en
//! `services::assignment_service`.

use std::collections::BTreeMap;

use crate::dto::officer_dto::{CreateOfficerRequest, UpdateOfficerRequest};
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::{Officer, Vehicle, VehicleStatus};
use crate::utils::errors::{AppError, AppResult};

#[derive(Debug)]
pub struct MemStorage {
    officers: BTreeMap<i32, Officer>,
    vehicles: BTreeMap<i32, Vehicle>,
    next_officer_id: i32,
    next_vehicle_id: i32,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            officers: BTreeMap::new(),
            vehicles: BTreeMap::new(),
            next_officer_id: 1,
            next_vehicle_id: 1,
        }
    }

    // ---- Officers ----

    pub fn officers(&self) -> Vec<Officer> {
        self.officers.values().cloned().collect()
    }

    pub fn officer(&self, id: i32) -> Option<&Officer> {
        self.officers.get(&id)
    }

    pub(crate) fn officer_mut(&mut self, id: i32) -> Option<&mut Officer> {
        self.officers.get_mut(&id)
    }

    /// El estado inicial es Disponible, o Sentado si el payload trae
    /// vehículo/slot: con asiento, la disponibilidad se deriva del asiento y
    /// el flag del payload no puede dejar un estado híbrido.
    pub fn create_officer(&mut self, request: CreateOfficerRequest) -> Officer {
        let id = self.next_officer_id;
        self.next_officer_id += 1;

        let seated = request.vehicle_id.is_some();
        let officer = Officer {
            id,
            name: request.name,
            badge: request.badge,
            initials: request.initials,
            is_available: !seated && request.is_available,
            is_corg: request.is_corg,
            vehicle_id: request.vehicle_id,
            slot_number: request.slot_number,
        };
        self.officers.insert(id, officer.clone());
        officer
    }

    /// Merge superficial: solo los campos presentes en el parche cambian.
    /// `vehicle_id`/`slot_number` admiten `null` explícito para limpiarse.
    pub fn update_officer(&mut self, id: i32, updates: UpdateOfficerRequest) -> AppResult<Officer> {
        let officer = self
            .officers
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Officer with id {} not found", id)))?;

        if let Some(name) = updates.name {
            officer.name = name;
        }
        if let Some(badge) = updates.badge {
            officer.badge = badge;
        }
        if let Some(initials) = updates.initials {
            officer.initials = initials;
        }
        if let Some(is_available) = updates.is_available {
            officer.is_available = is_available;
        }
        if let Some(is_corg) = updates.is_corg {
            officer.is_corg = is_corg;
        }
        if let Some(vehicle_id) = updates.vehicle_id {
            officer.vehicle_id = vehicle_id;
        }
        if let Some(slot_number) = updates.slot_number {
            officer.slot_number = slot_number;
        }

        Ok(officer.clone())
    }

    /// Idempotente: borrar un id inexistente es un no-op.
    pub fn delete_officer(&mut self, id: i32) {
        self.officers.remove(&id);
    }

    /// Efectivo que ocupa el par (vehículo, slot), si hay alguno.
    pub fn seat_holder(&self, vehicle_id: i32, slot_number: i32) -> Option<&Officer> {
        self.officers
            .values()
            .find(|o| o.seated_in(vehicle_id, slot_number))
    }

    /// El coordinador actual (por invariante hay a lo sumo uno).
    pub fn corg(&self) -> Option<&Officer> {
        self.officers.values().find(|o| o.is_corg)
    }

    pub(crate) fn corg_mut(&mut self) -> Option<&mut Officer> {
        self.officers.values_mut().find(|o| o.is_corg)
    }

    // ---- Vehicles ----

    pub fn vehicles(&self) -> Vec<Vehicle> {
        self.vehicles.values().cloned().collect()
    }

    pub fn vehicle(&self, id: i32) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    pub fn create_vehicle(&mut self, request: CreateVehicleRequest) -> Vehicle {
        let id = self.next_vehicle_id;
        self.next_vehicle_id += 1;

        let vehicle = Vehicle {
            id,
            call_sign: request.call_sign,
            license: request.license,
            status: request.status,
        };
        self.vehicles.insert(id, vehicle.clone());
        vehicle
    }

    pub fn update_vehicle(&mut self, id: i32, updates: UpdateVehicleRequest) -> AppResult<Vehicle> {
        let vehicle = self
            .vehicles
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Vehicle with id {} not found", id)))?;

        if let Some(call_sign) = updates.call_sign {
            vehicle.call_sign = call_sign;
        }
        if let Some(license) = updates.license {
            vehicle.license = license;
        }
        if let Some(status) = updates.status {
            vehicle.status = status;
        }

        Ok(vehicle.clone())
    }

    pub fn delete_vehicle(&mut self, id: i32) {
        self.vehicles.remove(&id);
    }

    // ---- Datos de demostración ----

    /// Carga el fixture de arranque del tablero: 4 vehículos y 6 efectivos,
    /// dos de ellos ya sentados en patrullas.
    pub fn seed_demo_data(&mut self) {
        let vehicle_data = [
            ("Unité Alpha-1", "VH-001-GP", VehicleStatus::Disponible),
            ("Unité Bravo-2", "VH-002-GP", VehicleStatus::EnPatrouille),
            ("Unité Charlie-3", "VH-003-GP", VehicleStatus::EnIntervention),
            ("Unité Delta-4", "VH-004-GP", VehicleStatus::HorsService),
        ];
        for (call_sign, license, status) in vehicle_data {
            self.create_vehicle(CreateVehicleRequest {
                call_sign: call_sign.to_string(),
                license: license.to_string(),
                status,
            });
        }

        let officer_data = [
            ("Jean Dupont", "Badge #1234", "JD", None, None),
            ("Marie Leblanc", "Badge #1235", "ML", None, None),
            ("Pierre Martin", "Badge #1236", "PM", None, None),
            ("Antoine Leroy", "Badge #1237", "AL", Some(2), Some(1)),
            ("Sophie Bernard", "Badge #1238", "SB", Some(3), Some(1)),
            ("Luc Dubois", "Badge #1239", "LD", Some(3), Some(2)),
        ];
        for (name, badge, initials, vehicle_id, slot_number) in officer_data {
            self.create_officer(CreateOfficerRequest {
                name: name.to_string(),
                badge: badge.to_string(),
                initials: initials.to_string(),
                is_available: vehicle_id.is_none(),
                is_corg: false,
                vehicle_id,
                slot_number,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn officer_request(name: &str) -> CreateOfficerRequest {
        CreateOfficerRequest {
            name: name.to_string(),
            badge: format!("Badge #{}", name.len()),
            initials: "XX".to_string(),
            is_available: true,
            is_corg: false,
            vehicle_id: None,
            slot_number: None,
        }
    }

    #[test]
    fn ids_start_at_one_and_increment_per_type() {
        let mut store = MemStorage::new();
        let o1 = store.create_officer(officer_request("a"));
        let o2 = store.create_officer(officer_request("b"));
        let v1 = store.create_vehicle(CreateVehicleRequest {
            call_sign: "Unité Alpha-1".to_string(),
            license: "VH-001-GP".to_string(),
            status: VehicleStatus::Disponible,
        });

        assert_eq!(o1.id, 1);
        assert_eq!(o2.id, 2);
        assert_eq!(v1.id, 1);
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let mut store = MemStorage::new();
        let o1 = store.create_officer(officer_request("a"));
        store.delete_officer(o1.id);
        let o2 = store.create_officer(officer_request("b"));

        assert_eq!(o2.id, 2);
        assert!(store.officer(o1.id).is_none());
    }

    #[test]
    fn listing_preserves_insertion_order() {
        let mut store = MemStorage::new();
        store.create_officer(officer_request("a"));
        store.create_officer(officer_request("b"));
        store.create_officer(officer_request("c"));
        store.delete_officer(2);
        store.create_officer(officer_request("d"));

        let ids: Vec<i32> = store.officers().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn create_with_seat_starts_seated_not_available() {
        let mut store = MemStorage::new();
        // is_available llega en true (el default del payload), pero hay asiento
        let officer = store.create_officer(CreateOfficerRequest {
            vehicle_id: Some(1),
            slot_number: Some(1),
            ..officer_request("seated")
        });

        assert!(!officer.is_available);
        assert_eq!(officer.vehicle_id, Some(1));
        assert_eq!(officer.slot_number, Some(1));
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let mut store = MemStorage::new();
        let officer = store.create_officer(officer_request("Jean Dupont"));

        let updated = store
            .update_officer(
                officer.id,
                UpdateOfficerRequest {
                    name: Some("Jean Durand".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Jean Durand");
        assert_eq!(updated.badge, officer.badge);
        assert!(updated.is_available);
    }

    #[test]
    fn update_clears_nullable_fields_on_explicit_null() {
        let mut store = MemStorage::new();
        let officer = store.create_officer(CreateOfficerRequest {
            vehicle_id: Some(1),
            slot_number: Some(1),
            is_available: false,
            ..officer_request("seated")
        });

        let updated = store
            .update_officer(
                officer.id,
                UpdateOfficerRequest {
                    vehicle_id: Some(None),
                    slot_number: Some(None),
                    is_available: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.vehicle_id, None);
        assert_eq!(updated.slot_number, None);
        assert!(updated.is_available);
    }

    #[test]
    fn update_missing_officer_is_not_found() {
        let mut store = MemStorage::new();
        let err = store
            .update_officer(99, UpdateOfficerRequest::default())
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn patch_json_distinguishes_absent_from_null() {
        let patch: UpdateOfficerRequest = serde_json::from_str(r#"{"vehicleId": null}"#).unwrap();
        assert_eq!(patch.vehicle_id, Some(None));
        assert_eq!(patch.slot_number, None);

        let patch: UpdateOfficerRequest = serde_json::from_str(r#"{"slotNumber": 2}"#).unwrap();
        assert_eq!(patch.slot_number, Some(Some(2)));
    }

    #[test]
    fn seed_loads_original_fixture() {
        let mut store = MemStorage::new();
        store.seed_demo_data();

        assert_eq!(store.vehicles().len(), 4);
        assert_eq!(store.officers().len(), 6);
        assert_eq!(
            store.vehicle(2).unwrap().status,
            VehicleStatus::EnPatrouille
        );
        let seated = store.seat_holder(3, 2).unwrap();
        assert_eq!(seated.name, "Luc Dubois");
        assert!(!seated.is_available);
        assert!(store.corg().is_none());
    }
}
