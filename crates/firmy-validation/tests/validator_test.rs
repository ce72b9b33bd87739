//! Integration tests for the hierarchy validator on in-memory SurrealDB.

use firmy_core::error::FirmyError;
use firmy_core::models::company::CreateCompany;
use firmy_core::models::department::CreateDepartment;
use firmy_core::models::division::CreateDivision;
use firmy_core::models::employee::CreateEmployee;
use firmy_core::models::project::CreateProject;
use firmy_core::repository::{
    CompanyRepository, DepartmentRepository, DivisionRepository, EmployeeRepository,
    ProjectRepository, Repositories,
};
use firmy_db::repository::SurrealRepositories;
use firmy_validation::{EntityValidator, RepositoryEntityValidator, ValidationResult};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use uuid::Uuid;

/// One company's chain of ids.
struct Chain {
    company: Uuid,
    division: Uuid,
    project: Uuid,
    department: Uuid,
    employee: Uuid,
}

struct Fixture {
    db: Surreal<Db>,
    validator: RepositoryEntityValidator<SurrealRepositories<Db>>,
    repos: SurrealRepositories<Db>,
    first: Chain,
    second: Chain,
}

async fn create_chain(repos: &SurrealRepositories<Db>, code: &str) -> Chain {
    let company = repos
        .companies()
        .create(CreateCompany {
            name: format!("Company {code}"),
            code: code.into(),
            leader_id: None,
        })
        .await
        .unwrap()
        .id;
    let division = repos
        .divisions()
        .create(CreateDivision {
            company_id: company,
            name: "Division".into(),
            code: format!("{code}-D"),
            leader_id: None,
        })
        .await
        .unwrap()
        .id;
    let project = repos
        .projects()
        .create(CreateProject {
            division_id: division,
            name: "Project".into(),
            code: format!("{code}-P"),
            leader_id: None,
        })
        .await
        .unwrap()
        .id;
    let department = repos
        .departments()
        .create(CreateDepartment {
            project_id: project,
            name: "Department".into(),
            code: format!("{code}-DEP"),
            leader_id: None,
        })
        .await
        .unwrap()
        .id;
    let employee = repos
        .employees()
        .create(CreateEmployee {
            company_id: company,
            department_id: Some(department),
            title: None,
            first_name: "Eva".into(),
            last_name: format!("Worker{code}"),
            phone: None,
            email: format!("eva@{code}.example"),
        })
        .await
        .unwrap()
        .id;

    Chain {
        company,
        division,
        project,
        department,
        employee,
    }
}

/// Two independent companies with one full chain each.
async fn setup() -> Fixture {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    firmy_db::init_schema(&db).await.unwrap();

    let repos = SurrealRepositories::new(db.clone());
    let first = create_chain(&repos, "one").await;
    let second = create_chain(&repos, "two").await;

    Fixture {
        db,
        validator: RepositoryEntityValidator::new(repos.clone()),
        repos,
        first,
        second,
    }
}

// ---------------------------------------------------------------------------
// Company
// ---------------------------------------------------------------------------

#[tokio::test]
async fn company_exists() {
    let f = setup().await;
    let outcome = f.validator.validate_company(f.first.company).await.unwrap();
    assert_eq!(outcome, ValidationResult::Success);
}

#[tokio::test]
async fn company_missing() {
    let f = setup().await;
    let outcome = f.validator.validate_company(Uuid::new_v4()).await.unwrap();
    assert_eq!(outcome, ValidationResult::CompanyNotFound);
}

// ---------------------------------------------------------------------------
// Division
// ---------------------------------------------------------------------------

#[tokio::test]
async fn division_in_company() {
    let f = setup().await;
    let outcome = f
        .validator
        .validate_division(f.first.division, f.first.company)
        .await
        .unwrap();
    assert_eq!(outcome, ValidationResult::Success);
}

#[tokio::test]
async fn division_missing_regardless_of_company() {
    let f = setup().await;
    for company in [f.first.company, Uuid::new_v4()] {
        let outcome = f
            .validator
            .validate_division(Uuid::new_v4(), company)
            .await
            .unwrap();
        assert_eq!(outcome, ValidationResult::DivisionNotFound);
    }
}

#[tokio::test]
async fn division_in_other_company() {
    let f = setup().await;
    let outcome = f
        .validator
        .validate_division(f.first.division, f.second.company)
        .await
        .unwrap();
    assert_eq!(outcome, ValidationResult::DivisionNotInCompany);
}

#[tokio::test]
async fn division_does_not_require_company_record() {
    let f = setup().await;
    // Remove the company record only, leaving the division's link dangling.
    f.db.query("DELETE type::record('company', $id)")
        .bind(("id", f.first.company.to_string()))
        .await
        .unwrap();

    let outcome = f
        .validator
        .validate_division(f.first.division, f.first.company)
        .await
        .unwrap();
    assert_eq!(outcome, ValidationResult::Success);
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

#[tokio::test]
async fn project_full_chain() {
    let f = setup().await;
    let outcome = f
        .validator
        .validate_project(f.first.project, f.first.division, f.first.company)
        .await
        .unwrap();
    assert_eq!(outcome, ValidationResult::Success);
}

#[tokio::test]
async fn project_missing_wins_over_bad_ancestors() {
    let f = setup().await;
    let outcome = f
        .validator
        .validate_project(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4())
        .await
        .unwrap();
    assert_eq!(outcome, ValidationResult::ProjectNotFound);
}

#[tokio::test]
async fn project_in_other_division() {
    let f = setup().await;
    let outcome = f
        .validator
        .validate_project(f.first.project, f.second.division, f.second.company)
        .await
        .unwrap();
    assert_eq!(outcome, ValidationResult::ProjectNotInDivision);
}

#[tokio::test]
async fn project_reports_division_level_failure() {
    let f = setup().await;
    let outcome = f
        .validator
        .validate_project(f.first.project, f.first.division, f.second.company)
        .await
        .unwrap();
    assert_eq!(outcome, ValidationResult::DivisionNotInCompany);
}

// ---------------------------------------------------------------------------
// Department
// ---------------------------------------------------------------------------

#[tokio::test]
async fn department_full_chain() {
    let f = setup().await;
    let c = &f.first;
    let outcome = f
        .validator
        .validate_department(c.department, c.project, c.division, c.company)
        .await
        .unwrap();
    assert_eq!(outcome, ValidationResult::Success);
}

#[tokio::test]
async fn department_missing() {
    let f = setup().await;
    let c = &f.first;
    let outcome = f
        .validator
        .validate_department(Uuid::new_v4(), c.project, c.division, c.company)
        .await
        .unwrap();
    assert_eq!(outcome, ValidationResult::DepartmentNotFound);
}

#[tokio::test]
async fn department_in_other_project() {
    let f = setup().await;
    let c = &f.first;
    let outcome = f
        .validator
        .validate_department(c.department, f.second.project, c.division, c.company)
        .await
        .unwrap();
    assert_eq!(outcome, ValidationResult::DepartmentNotInProject);
}

#[tokio::test]
async fn department_reports_project_level_failure() {
    let f = setup().await;
    let c = &f.first;
    let outcome = f
        .validator
        .validate_department(c.department, c.project, f.second.division, c.company)
        .await
        .unwrap();
    assert_eq!(outcome, ValidationResult::ProjectNotInDivision);
}

#[tokio::test]
async fn department_with_wrong_company_reports_division() {
    let f = setup().await;
    let c = &f.first;
    let outcome = f
        .validator
        .validate_department(c.department, c.project, c.division, f.second.company)
        .await
        .unwrap();
    assert_eq!(outcome, ValidationResult::DivisionNotInCompany);
}

// ---------------------------------------------------------------------------
// Employee & leader
// ---------------------------------------------------------------------------

#[tokio::test]
async fn employee_in_company() {
    let f = setup().await;
    let outcome = f
        .validator
        .validate_employee(f.first.employee, f.first.company)
        .await
        .unwrap();
    assert_eq!(outcome, ValidationResult::Success);
}

#[tokio::test]
async fn employee_missing_and_foreign_collapse() {
    let f = setup().await;
    let missing = f
        .validator
        .validate_employee(Uuid::new_v4(), f.first.company)
        .await
        .unwrap();
    let foreign = f
        .validator
        .validate_employee(f.second.employee, f.first.company)
        .await
        .unwrap();
    assert_eq!(missing, ValidationResult::EmployeeNotInCompany);
    assert_eq!(foreign, ValidationResult::EmployeeNotInCompany);
}

#[tokio::test]
async fn absent_leader_is_valid_for_any_company() {
    let f = setup().await;
    for company in [f.first.company, Uuid::new_v4()] {
        let outcome = f.validator.validate_leader(None, company).await.unwrap();
        assert_eq!(outcome, ValidationResult::Success);
    }
}

#[tokio::test]
async fn leader_from_same_company() {
    let f = setup().await;
    let outcome = f
        .validator
        .validate_leader(Some(f.first.employee), f.first.company)
        .await
        .unwrap();
    assert_eq!(outcome, ValidationResult::Success);
}

#[tokio::test]
async fn leader_from_other_company_or_missing() {
    let f = setup().await;
    for leader in [f.second.employee, Uuid::new_v4()] {
        let outcome = f
            .validator
            .validate_leader(Some(leader), f.first.company)
            .await
            .unwrap();
        assert_eq!(outcome, ValidationResult::InvalidLeader);
    }
}

// ---------------------------------------------------------------------------
// Behavior over time
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_calls_agree() {
    let f = setup().await;
    let c = &f.first;
    for _ in 0..3 {
        let outcome = f
            .validator
            .validate_department(c.department, c.project, c.division, f.second.company)
            .await
            .unwrap();
        assert_eq!(outcome, ValidationResult::DivisionNotInCompany);
    }
}

#[tokio::test]
async fn sees_changes_without_caching() {
    let f = setup().await;
    assert_eq!(
        f.validator.validate_company(f.second.company).await.unwrap(),
        ValidationResult::Success
    );

    f.repos.companies().delete(f.second.company).await.unwrap();

    assert_eq!(
        f.validator.validate_company(f.second.company).await.unwrap(),
        ValidationResult::CompanyNotFound
    );
    assert_eq!(
        f.validator
            .validate_employee(f.second.employee, f.second.company)
            .await
            .unwrap(),
        ValidationResult::EmployeeNotInCompany
    );
}

#[tokio::test]
async fn store_failure_is_an_error() {
    // A record the repository cannot decode stands in for a broken store.
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    let id = Uuid::new_v4();
    db.query("CREATE type::record('company', $id) SET name = 42")
        .bind(("id", id.to_string()))
        .await
        .unwrap();

    let validator = RepositoryEntityValidator::new(SurrealRepositories::new(db));
    let result = validator.validate_company(id).await;
    assert!(matches!(result, Err(FirmyError::Database(_))), "{result:?}");
}
