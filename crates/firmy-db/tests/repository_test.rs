//! Integration tests for the Company, Division, Project and Department
//! repositories using in-memory SurrealDB.

use firmy_core::error::FirmyError;
use firmy_core::models::company::{CreateCompany, UpdateCompany};
use firmy_core::models::department::{CreateDepartment, UpdateDepartment};
use firmy_core::models::division::{CreateDivision, UpdateDivision};
use firmy_core::models::project::CreateProject;
use firmy_core::repository::{
    CompanyRepository, DepartmentRepository, DivisionRepository, ProjectRepository,
};
use firmy_db::repository::{
    SurrealCompanyRepository, SurrealDepartmentRepository, SurrealDivisionRepository,
    SurrealProjectRepository,
};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use uuid::Uuid;

/// Helper: spin up in-memory DB and initialize the schema.
async fn setup() -> Surreal<Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    firmy_db::init_schema(&db).await.unwrap();
    db
}

async fn create_company(db: &Surreal<Db>, code: &str) -> Uuid {
    SurrealCompanyRepository::new(db.clone())
        .create(CreateCompany {
            name: format!("Company {code}"),
            code: code.into(),
            leader_id: None,
        })
        .await
        .unwrap()
        .id
}

async fn create_division(db: &Surreal<Db>, company_id: Uuid, code: &str) -> Uuid {
    SurrealDivisionRepository::new(db.clone())
        .create(CreateDivision {
            company_id,
            name: format!("Division {code}"),
            code: code.into(),
            leader_id: None,
        })
        .await
        .unwrap()
        .id
}

async fn create_project(db: &Surreal<Db>, division_id: Uuid, code: &str) -> Uuid {
    SurrealProjectRepository::new(db.clone())
        .create(CreateProject {
            division_id,
            name: format!("Project {code}"),
            code: code.into(),
            leader_id: None,
        })
        .await
        .unwrap()
        .id
}

// -----------------------------------------------------------------------
// Company tests
// -----------------------------------------------------------------------

#[tokio::test]
async fn create_and_get_company() {
    let db = setup().await;
    let repo = SurrealCompanyRepository::new(db);

    let company = repo
        .create(CreateCompany {
            name: "ACME Corp".into(),
            code: "ACME".into(),
            leader_id: None,
        })
        .await
        .unwrap();

    assert_eq!(company.name, "ACME Corp");
    assert_eq!(company.code, "ACME");
    assert_eq!(company.leader_id, None);

    let fetched = repo.get_by_id(company.id).await.unwrap();
    assert_eq!(fetched.id, company.id);
    assert_eq!(fetched.name, company.name);
}

#[tokio::test]
async fn get_missing_company_is_not_found() {
    let db = setup().await;
    let repo = SurrealCompanyRepository::new(db);

    let err = repo.get_by_id(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, FirmyError::NotFound { .. }));
}

#[tokio::test]
async fn update_company_only_touches_given_fields() {
    let db = setup().await;
    let repo = SurrealCompanyRepository::new(db);

    let company = repo
        .create(CreateCompany {
            name: "Before".into(),
            code: "BEF".into(),
            leader_id: None,
        })
        .await
        .unwrap();

    let leader = Uuid::new_v4();
    let updated = repo
        .update(
            company.id,
            UpdateCompany {
                name: Some("After".into()),
                leader_id: Some(leader),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, company.id);
    assert_eq!(updated.name, "After");
    assert_eq!(updated.code, "BEF"); // unchanged
    assert_eq!(updated.leader_id, Some(leader));
    assert!(updated.updated_at >= company.updated_at);
}

#[tokio::test]
async fn update_missing_company_is_not_found() {
    let db = setup().await;
    let repo = SurrealCompanyRepository::new(db);

    let result = repo
        .update(
            Uuid::new_v4(),
            UpdateCompany {
                name: Some("Ghost".into()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(FirmyError::NotFound { .. })));
}

#[tokio::test]
async fn list_companies() {
    let db = setup().await;
    let repo = SurrealCompanyRepository::new(db.clone());

    for i in 0..3 {
        create_company(&db, &format!("C{i}")).await;
    }

    let companies = repo.list().await.unwrap();
    assert_eq!(companies.len(), 3);
}

// -----------------------------------------------------------------------
// Division tests
// -----------------------------------------------------------------------

#[tokio::test]
async fn create_and_get_division() {
    let db = setup().await;
    let company_id = create_company(&db, "ACME").await;
    let repo = SurrealDivisionRepository::new(db);

    let division = repo
        .create(CreateDivision {
            company_id,
            name: "Engineering".into(),
            code: "ENG".into(),
            leader_id: None,
        })
        .await
        .unwrap();

    let fetched = repo.get_by_id(division.id).await.unwrap();
    assert_eq!(fetched.company_id, company_id);
    assert_eq!(fetched.name, "Engineering");
}

#[tokio::test]
async fn list_divisions_by_company() {
    let db = setup().await;
    let acme = create_company(&db, "ACME").await;
    let other = create_company(&db, "OTHR").await;

    create_division(&db, acme, "D1").await;
    create_division(&db, acme, "D2").await;
    create_division(&db, other, "D3").await;

    let repo = SurrealDivisionRepository::new(db);
    let divisions = repo.list_by_company(acme).await.unwrap();

    assert_eq!(divisions.len(), 2);
    assert!(divisions.iter().all(|d| d.company_id == acme));
}

#[tokio::test]
async fn update_division_keeps_parent() {
    let db = setup().await;
    let company_id = create_company(&db, "ACME").await;
    let division_id = create_division(&db, company_id, "ENG").await;
    let repo = SurrealDivisionRepository::new(db);

    let updated = repo
        .update(
            division_id,
            UpdateDivision {
                code: Some("R&D".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.code, "R&D");
    assert_eq!(updated.name, "Division ENG");
    assert_eq!(updated.company_id, company_id);
}

// -----------------------------------------------------------------------
// Project tests
// -----------------------------------------------------------------------

#[tokio::test]
async fn list_projects_by_division_and_company() {
    let db = setup().await;
    let acme = create_company(&db, "ACME").await;
    let other = create_company(&db, "OTHR").await;
    let eng = create_division(&db, acme, "ENG").await;
    let ops = create_division(&db, acme, "OPS").await;
    let foreign = create_division(&db, other, "ENG").await;

    create_project(&db, eng, "P1").await;
    create_project(&db, eng, "P2").await;
    create_project(&db, ops, "P3").await;
    create_project(&db, foreign, "P4").await;

    let repo = SurrealProjectRepository::new(db);

    let in_eng = repo.list_by_division(eng).await.unwrap();
    assert_eq!(in_eng.len(), 2);

    let in_acme = repo.list_by_company(acme).await.unwrap();
    assert_eq!(in_acme.len(), 3);
    assert!(in_acme.iter().all(|p| p.division_id != foreign));
}

// -----------------------------------------------------------------------
// Department tests
// -----------------------------------------------------------------------

#[tokio::test]
async fn department_crud() {
    let db = setup().await;
    let company_id = create_company(&db, "ACME").await;
    let division_id = create_division(&db, company_id, "ENG").await;
    let project_id = create_project(&db, division_id, "APOLLO").await;
    let repo = SurrealDepartmentRepository::new(db);

    let department = repo
        .create(CreateDepartment {
            project_id,
            name: "Backend".into(),
            code: "BE".into(),
            leader_id: None,
        })
        .await
        .unwrap();
    assert_eq!(department.project_id, project_id);

    let updated = repo
        .update(
            department.id,
            UpdateDepartment {
                name: Some("Platform".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Platform");
    assert_eq!(updated.code, "BE");

    assert_eq!(repo.list_by_project(project_id).await.unwrap().len(), 1);
    assert_eq!(repo.list_by_company(company_id).await.unwrap().len(), 1);

    repo.delete(department.id).await.unwrap();
    assert!(repo.get_by_id(department.id).await.is_err());
}

#[tokio::test]
async fn list_departments_by_company_spans_projects() {
    let db = setup().await;
    let acme = create_company(&db, "ACME").await;
    let other = create_company(&db, "OTHR").await;
    let eng = create_division(&db, acme, "ENG").await;
    let p1 = create_project(&db, eng, "P1").await;
    let p2 = create_project(&db, eng, "P2").await;
    let foreign = create_project(&db, create_division(&db, other, "X").await, "P3").await;

    let repo = SurrealDepartmentRepository::new(db);
    for (project_id, code) in [(p1, "A"), (p2, "B"), (foreign, "C")] {
        repo.create(CreateDepartment {
            project_id,
            name: format!("Department {code}"),
            code: code.into(),
            leader_id: None,
        })
        .await
        .unwrap();
    }

    let departments = repo.list_by_company(acme).await.unwrap();
    assert_eq!(departments.len(), 2);
    assert!(departments.iter().all(|d| d.project_id != foreign));
}
