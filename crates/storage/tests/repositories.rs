use storage::Database;
use storage::dto::athlete::{AthleteFilter, CreateAthleteRequest, UpdateAthleteRequest};
use storage::dto::category::{CreateCategoryRequest, UpdateCategoryRequest};
use storage::dto::training_center::{CreateTrainingCenterRequest, UpdateTrainingCenterRequest};
use storage::error::StorageError;
use storage::models::{Athlete, Category, TrainingCenter};
use storage::repository::{AthleteRepository, CategoryRepository, TrainingCenterRepository};
use uuid::Uuid;

async fn test_db() -> Database {
    let db = Database::new("sqlite::memory:")
        .await
        .expect("open in-memory database");
    db.run_migrations().await.expect("run migrations");
    db
}

fn category_req(name: &str) -> CreateCategoryRequest {
    CreateCategoryRequest {
        name: name.to_string(),
    }
}

fn center_req(name: &str) -> CreateTrainingCenterRequest {
    CreateTrainingCenterRequest {
        name: name.to_string(),
        address: "Rua X, Q02".to_string(),
        owner: "Marcos".to_string(),
    }
}

fn athlete_req(name: &str, cpf: &str) -> CreateAthleteRequest {
    CreateAthleteRequest {
        name: name.to_string(),
        cpf: cpf.to_string(),
        weight: 74.5,
        height: 1.75,
        sex: "F".to_string(),
        category_name: "Scale".to_string(),
        training_center_name: "CT King".to_string(),
    }
}

async fn seed_references(db: &Database) -> (Category, TrainingCenter) {
    let category = CategoryRepository::new(db.pool())
        .create(&category_req("Scale"))
        .await
        .expect("create category");
    let center = TrainingCenterRepository::new(db.pool())
        .create(&center_req("CT King"))
        .await
        .expect("create training center");
    (category, center)
}

async fn seed_athlete(db: &Database, name: &str, cpf: &str) -> Athlete {
    let (category, center) = seed_references(db).await;
    AthleteRepository::new(db.pool())
        .create(&athlete_req(name, cpf), category.id, center.id)
        .await
        .expect("create athlete")
}

#[tokio::test]
async fn create_then_get_category_round_trips() {
    let db = test_db().await;
    let repo = CategoryRepository::new(db.pool());

    let created = repo.create(&category_req("Scale")).await.unwrap();
    let fetched = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Scale");
}

#[tokio::test]
async fn duplicate_category_name_is_rejected() {
    let db = test_db().await;
    let repo = CategoryRepository::new(db.pool());

    repo.create(&category_req("Scale")).await.unwrap();
    let err = repo.create(&category_req("Scale")).await.unwrap_err();

    match err {
        StorageError::DuplicateName { name, .. } => assert_eq!(name, "Scale"),
        other => panic!("expected DuplicateName, got {other:?}"),
    }

    // The first row stays intact.
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn get_missing_category_is_not_found() {
    let db = test_db().await;
    let repo = CategoryRepository::new(db.pool());

    let err = repo.find_by_id(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn category_update_with_empty_patch_changes_nothing() {
    let db = test_db().await;
    let repo = CategoryRepository::new(db.pool());

    let created = repo.create(&category_req("Scale")).await.unwrap();
    let patch = UpdateCategoryRequest { name: None };

    let updated = repo.update(created.id, &created, &patch).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Scale");
}

#[tokio::test]
async fn category_rename_to_taken_name_is_rejected() {
    let db = test_db().await;
    let repo = CategoryRepository::new(db.pool());

    repo.create(&category_req("Scale")).await.unwrap();
    let rx = repo.create(&category_req("Rx")).await.unwrap();

    let patch = UpdateCategoryRequest {
        name: Some("Scale".to_string()),
    };
    let err = repo.update(rx.id, &rx, &patch).await.unwrap_err();

    assert!(matches!(err, StorageError::DuplicateName { .. }));
}

#[tokio::test]
async fn delete_category_twice_is_not_found() {
    let db = test_db().await;
    let repo = CategoryRepository::new(db.pool());

    let created = repo.create(&category_req("Scale")).await.unwrap();

    repo.delete(created.id).await.unwrap();
    let err = repo.find_by_id(created.id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));

    let err = repo.delete(created.id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn delete_referenced_category_is_restricted() {
    let db = test_db().await;
    let athlete = seed_athlete(&db, "Ana", "12345678900").await;

    let repo = CategoryRepository::new(db.pool());
    let err = repo.delete(athlete.category_id).await.unwrap_err();

    assert!(matches!(err, StorageError::StillReferenced { .. }));
    assert!(repo.find_by_id(athlete.category_id).await.is_ok());
}

#[tokio::test]
async fn duplicate_training_center_name_is_rejected() {
    let db = test_db().await;
    let repo = TrainingCenterRepository::new(db.pool());

    repo.create(&center_req("CT King")).await.unwrap();
    let err = repo.create(&center_req("CT King")).await.unwrap_err();

    match err {
        StorageError::DuplicateName { name, .. } => assert_eq!(name, "CT King"),
        other => panic!("expected DuplicateName, got {other:?}"),
    }
}

#[tokio::test]
async fn training_center_patch_touches_only_the_name() {
    let db = test_db().await;
    let repo = TrainingCenterRepository::new(db.pool());

    let created = repo.create(&center_req("CT King")).await.unwrap();
    let patch = UpdateTrainingCenterRequest {
        name: Some("CT Queen".to_string()),
    };

    let updated = repo.update(created.id, &created, &patch).await.unwrap();

    assert_eq!(updated.name, "CT Queen");
    assert_eq!(updated.address, created.address);
    assert_eq!(updated.owner, created.owner);
}

#[tokio::test]
async fn create_then_get_athlete_round_trips() {
    let db = test_db().await;
    let created = seed_athlete(&db, "Ana", "12345678900").await;

    let repo = AthleteRepository::new(db.pool());
    let fetched = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.created_at, created.created_at);
    assert_eq!(fetched.name, "Ana");
    assert_eq!(fetched.cpf, "12345678900");
    assert_eq!(fetched.weight, 74.5);
    assert_eq!(fetched.height, 1.75);
    assert_eq!(fetched.sex, "F");

    let detailed = repo.find_by_id_detailed(created.id).await.unwrap();
    assert_eq!(detailed.category, "Scale");
    assert_eq!(detailed.training_center, "CT King");
}

#[tokio::test]
async fn duplicate_cpf_is_rejected_and_first_row_survives() {
    let db = test_db().await;
    let first = seed_athlete(&db, "Ana", "12345678900").await;

    let repo = AthleteRepository::new(db.pool());
    let err = repo
        .create(
            &athlete_req("Bia", "12345678900"),
            first.category_id,
            first.training_center_id,
        )
        .await
        .unwrap_err();

    match err {
        StorageError::DuplicateCpf { cpf } => assert_eq!(cpf, "12345678900"),
        other => panic!("expected DuplicateCpf, got {other:?}"),
    }

    assert!(repo.find_by_id(first.id).await.is_ok());
    assert_eq!(repo.list(&AthleteFilter::default()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn athlete_patch_leaves_omitted_fields_unchanged() {
    let db = test_db().await;
    let created = seed_athlete(&db, "Ana", "12345678900").await;

    let repo = AthleteRepository::new(db.pool());
    let patch = UpdateAthleteRequest {
        name: None,
        cpf: None,
        weight: Some(71.0),
        height: None,
        sex: None,
    };

    let updated = repo.update(created.id, &created, &patch).await.unwrap();

    assert_eq!(updated.weight, 71.0);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.cpf, created.cpf);
    assert_eq!(updated.height, created.height);
    assert_eq!(updated.sex, created.sex);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);

    // Applying the same patch again reaches the same end state.
    let again = repo.update(created.id, &updated, &patch).await.unwrap();
    assert_eq!(again.weight, 71.0);
    assert_eq!(again.name, created.name);
}

#[tokio::test]
async fn athlete_list_honors_one_filter_and_orders_stably() {
    let db = test_db().await;
    let (category, center) = seed_references(&db).await;
    let repo = AthleteRepository::new(db.pool());

    for (name, cpf) in [
        ("Carla", "11111111111"),
        ("Ana", "22222222222"),
        ("Bia", "33333333333"),
        ("Ana", "44444444444"),
    ] {
        repo.create(&athlete_req(name, cpf), category.id, center.id)
            .await
            .unwrap();
    }

    let all = repo.list(&AthleteFilter::default()).await.unwrap();
    let names: Vec<&str> = all.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Ana", "Bia", "Carla"]);
    assert!(all.iter().all(|a| a.category == "Scale"));
    assert!(all.iter().all(|a| a.training_center == "CT King"));

    let by_name = repo
        .list(&AthleteFilter {
            name: Some("Ana".to_string()),
            cpf: None,
        })
        .await
        .unwrap();
    assert_eq!(by_name.len(), 2);
    assert!(by_name.iter().all(|a| a.name == "Ana"));

    // name wins when both filters are supplied
    let both = repo
        .list(&AthleteFilter {
            name: Some("Bia".to_string()),
            cpf: Some("11111111111".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].name, "Bia");

    let by_cpf = repo
        .list(&AthleteFilter {
            name: None,
            cpf: Some("11111111111".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(by_cpf.len(), 1);
    assert_eq!(by_cpf[0].name, "Carla");
}

#[tokio::test]
async fn delete_athlete_then_get_is_not_found() {
    let db = test_db().await;
    let created = seed_athlete(&db, "Ana", "12345678900").await;

    let repo = AthleteRepository::new(db.pool());
    repo.delete(created.id).await.unwrap();

    let err = repo.find_by_id(created.id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));

    let err = repo.delete(created.id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}
