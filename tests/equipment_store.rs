//! Repository-level tests for the equipment store

mod common;

use gnb_inventario::{
    error::AppError,
    models::{equipment::EquipoChanges, NewEquipo, User},
    repository::equipment::SeedOutcome,
    services::equipment::demo_inventory,
};

use common::memory_repository;

fn new_equipo(serial: &str) -> NewEquipo {
    NewEquipo {
        nombre: format!("Detector {}", serial),
        tipo: "Sensor Térmico".to_string(),
        serial: serial.to_string(),
        ubicacion: "Piso 1".to_string(),
        estado: "Operativo".to_string(),
        observaciones: String::new(),
    }
}

fn changes_from(data: &NewEquipo, estado: Option<&str>) -> EquipoChanges {
    EquipoChanges {
        nombre: data.nombre.clone(),
        tipo: data.tipo.clone(),
        serial: data.serial.clone(),
        ubicacion: data.ubicacion.clone(),
        observaciones: data.observaciones.clone(),
        estado: estado.map(str::to_string),
    }
}

#[tokio::test]
async fn test_list_follows_insertion_order() {
    let repository = memory_repository().await;
    for serial in ["C-3", "A-1", "B-2"] {
        repository.equipment.create(&new_equipo(serial)).await.unwrap();
    }

    let serials: Vec<String> = repository
        .equipment
        .list()
        .await
        .unwrap()
        .into_iter()
        .filter_map(|e| e.serial)
        .collect();
    assert_eq!(serials, vec!["C-3", "A-1", "B-2"]);
}

#[tokio::test]
async fn test_create_returns_assigned_id() {
    let repository = memory_repository().await;
    let created = repository.equipment.create(&new_equipo("T-1")).await.unwrap();

    let fetched = repository.equipment.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_duplicate_serial_leaves_store_unchanged() {
    let repository = memory_repository().await;
    repository.equipment.create(&new_equipo("T-1")).await.unwrap();
    let before = repository.equipment.list().await.unwrap();

    let err = repository.equipment.create(&new_equipo("T-1")).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(repository.equipment.list().await.unwrap(), before);

    // the store is still writable after the rollback
    repository.equipment.create(&new_equipo("T-2")).await.unwrap();
    assert_eq!(repository.equipment.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_update_and_delete_unknown_id() {
    let repository = memory_repository().await;
    let data = new_equipo("T-1");

    let err = repository.equipment.update(42, &changes_from(&data, None)).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = repository.equipment.delete(42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_update_estado_only_when_supplied() {
    let repository = memory_repository().await;
    let data = new_equipo("T-1");
    let created = repository.equipment.create(&data).await.unwrap();

    let updated = repository
        .equipment
        .update(created.id, &changes_from(&data, Some("Falla")))
        .await
        .unwrap();
    assert_eq!(updated.estado, "Falla");

    let updated = repository
        .equipment
        .update(created.id, &changes_from(&data, None))
        .await
        .unwrap();
    assert_eq!(updated.estado, "Falla");
}

#[tokio::test]
async fn test_update_serial_collision_is_update_error() {
    let repository = memory_repository().await;
    repository.equipment.create(&new_equipo("T-1")).await.unwrap();
    let second = repository.equipment.create(&new_equipo("T-2")).await.unwrap();

    let err = repository
        .equipment
        .update(second.id, &changes_from(&new_equipo("T-1"), None))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Update(_)));

    let unchanged = repository.equipment.get_by_id(second.id).await.unwrap();
    assert_eq!(unchanged.serial.as_deref(), Some("T-2"));
}

#[tokio::test]
async fn test_seed_only_into_empty_store() {
    let repository = memory_repository().await;
    let demo = demo_inventory();

    assert_eq!(repository.equipment.seed(&demo).await.unwrap(), SeedOutcome::Seeded(3));
    assert_eq!(repository.equipment.seed(&demo).await.unwrap(), SeedOutcome::AlreadySeeded);
    assert_eq!(repository.equipment.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_seed_serial_collision_reads_as_already_seeded() {
    let repository = memory_repository().await;
    // the second FK-001 collides the way a seed committed in between would
    let mut records = demo_inventory();
    records.push(records[0].clone());

    assert_eq!(repository.equipment.seed(&records).await.unwrap(), SeedOutcome::AlreadySeeded);
    assert_eq!(repository.equipment.count().await.unwrap(), 0);

    // rolled back cleanly, so a real seed still goes through
    assert_eq!(repository.equipment.seed(&demo_inventory()).await.unwrap(), SeedOutcome::Seeded(3));
}

#[tokio::test]
async fn test_users_table_enforces_unique_username() {
    let repository = memory_repository().await;
    let insert = "INSERT INTO users (username, password_hash) VALUES ($1, $2)";

    sqlx::query(insert)
        .bind("supervisor")
        .bind("hash")
        .execute(&repository.pool)
        .await
        .unwrap();
    assert!(sqlx::query(insert)
        .bind("supervisor")
        .bind("other")
        .execute(&repository.pool)
        .await
        .is_err());

    let users = sqlx::query_as::<_, User>("SELECT id, username, password_hash FROM users")
        .fetch_all(&repository.pool)
        .await
        .unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "supervisor");
}
