//! In-process mock of the academic backend.
//!
//! Serves a small fixed hierarchy on an ephemeral port and counts requests per path
//! so tests can assert how often the client actually went to the network.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, Query, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use facultyhub::api::ApiClient;
use facultyhub::facultyhub_cache::{Listing, Query as CacheQuery};
use facultyhub::facultyhub_config::ApiConfig;
use facultyhub::facultyhub_models::{
    AcademicYear, AcademicYearId, Department, DepartmentId, Level, LevelName, Specialization,
};
use facultyhub::modules::hierarchy::HierarchySource;
use fake::Fake;
use fake::faker::name::en::Name;
use serde_json::{Value, json};

pub const TOKEN: &str = "test-token";
pub const CLOSED_YEAR_ERROR: &str = "العام الدراسي مغلق - لا يمكن إضافة تعيينات جديدة";
pub const DUPLICATE_ASSIGNMENT_ERROR: &str = "هذا الدكتور معين بالفعل لهذه المادة";

pub const ELECTRICAL: i64 = 1;
pub const CIVIL: i64 = 2;
pub const ARCHITECTURE: i64 = 3;

pub const CLOSED_YEAR: i64 = 1;
pub const OPEN_YEAR: i64 = 2;

/// Level ids of the fixture hierarchy.
pub const ELEC_FIRST: i64 = 10;
pub const ELEC_SECOND: i64 = 11;
pub const CIVIL_FIRST: i64 = 20;
pub const CIVIL_SECOND_CLOSED: i64 = 21;

pub const POWER: i64 = 7;

pub const FIRST_TERM: i64 = 100;
pub const SECOND_TERM: i64 = 101;
pub const CLOSED_TERM: i64 = 102;

#[derive(Default)]
pub struct MockState {
    hits: Mutex<HashMap<String, usize>>,
    /// Requests to this path answer 503.
    failing_path: Mutex<Option<String>>,
    assignments: Mutex<Vec<Value>>,
    templates: Mutex<Vec<Value>>,
    approved: Mutex<Vec<i64>>,
    uploads: Mutex<Vec<HashMap<String, String>>>,
    request_ids: Mutex<Vec<String>>,
}

pub struct MockBackend {
    pub addr: SocketAddr,
    pub state: Arc<MockState>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        state.templates.lock().unwrap().extend([
            template_json(1, "Standard", [10, 10, 10, 20, 50], true),
            template_json(2, "Labs", [20, 0, 30, 10, 40], false),
        ]);

        let academic = Router::new()
            .route("/departments/", get(departments))
            .route("/years/", get(years))
            .route("/levels/", get(levels))
            .route("/specializations/", get(specializations))
            .route("/subjects/", get(subjects))
            .route("/student-affairs/students/", get(students))
            .route(
                "/student-affairs/students/{id}/reset-password/",
                post(reset_password),
            )
            .route("/staff-affairs/doctors/", get(doctors))
            .route("/staff-affairs/terms/", get(terms))
            .route("/staff-affairs/assignments/", get(assignments))
            .route("/staff-affairs/assign-doctor/", post(assign_doctor))
            .route(
                "/grading-templates/",
                get(list_templates).post(create_template),
            )
            .route("/grading-templates/{id}/", put(update_template))
            .route("/exam-grades/upload/", post(upload_grades))
            .route("/exam-grades/pending/", get(pending_grades))
            .route("/exam-grades/approve/{level_id}/", post(approve_grades));

        let app = Router::new()
            .nest("/api/academic", academic)
            .route("/api/auth/profile/", get(profile))
            .layer(middleware::from_fn_with_state(state.clone(), count_and_fail))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::from_config(ApiConfig::for_base_url(&self.base_url()).with_token(TOKEN)).unwrap()
    }

    pub fn anonymous_client(&self) -> ApiClient {
        ApiClient::from_config(ApiConfig::for_base_url(&self.base_url())).unwrap()
    }

    /// Requests seen for `path`, relative to the academic prefix (e.g. `"levels/"`).
    pub fn hits(&self, path: &str) -> usize {
        let key = format!("/api/academic/{}", path);
        self.state.hits.lock().unwrap().get(&key).copied().unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.state.hits.lock().unwrap().values().sum()
    }

    pub fn fail(&self, path: &str) {
        *self.state.failing_path.lock().unwrap() = Some(format!("/api/academic/{}", path));
    }

    pub fn recover(&self) {
        *self.state.failing_path.lock().unwrap() = None;
    }

    pub fn assignment_count(&self) -> usize {
        self.state.assignments.lock().unwrap().len()
    }

    pub fn approved_levels(&self) -> Vec<i64> {
        self.state.approved.lock().unwrap().clone()
    }

    pub fn uploads(&self) -> Vec<HashMap<String, String>> {
        self.state.uploads.lock().unwrap().clone()
    }

    pub fn request_ids(&self) -> Vec<String> {
        self.state.request_ids.lock().unwrap().clone()
    }
}

pub async fn department(client: &ApiClient, id: i64) -> Department {
    let Listing::Departments(departments) = client.fetch(&CacheQuery::Departments).await.unwrap() else {
        panic!("expected departments");
    };
    departments
        .into_iter()
        .find(|d| d.id == DepartmentId::new(id))
        .unwrap()
}

pub async fn year(client: &ApiClient, department: i64, id: i64) -> AcademicYear {
    let query = CacheQuery::Years {
        department: DepartmentId::new(department),
    };
    let Listing::Years(years) = client.fetch(&query).await.unwrap() else {
        panic!("expected years");
    };
    years
        .into_iter()
        .find(|y| y.id == AcademicYearId::new(id))
        .unwrap()
}

pub async fn level(client: &ApiClient, department: i64, year: i64, name: LevelName) -> Level {
    let query = CacheQuery::Levels {
        department: DepartmentId::new(department),
        year: AcademicYearId::new(year),
    };
    let Listing::Levels(levels) = client.fetch(&query).await.unwrap() else {
        panic!("expected levels");
    };
    levels.into_iter().find(|l| l.name == name).unwrap()
}

pub async fn power(client: &ApiClient) -> Specialization {
    let query = CacheQuery::Specializations {
        department: DepartmentId::new(ELECTRICAL),
    };
    let Listing::Specializations(specializations) = client.fetch(&query).await.unwrap() else {
        panic!("expected specializations");
    };
    specializations.into_iter().next().unwrap()
}

async fn count_and_fail(State(state): State<Arc<MockState>>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    *state.hits.lock().unwrap().entry(path.clone()).or_insert(0) += 1;
    if let Some(id) = request.headers().get("x-request-id").and_then(|v| v.to_str().ok()) {
        state.request_ids.lock().unwrap().push(id.to_string());
    }

    let failing = state.failing_path.lock().unwrap().clone();
    if failing.as_deref() == Some(path.as_str()) {
        return (StatusCode::SERVICE_UNAVAILABLE, "<html>Service Unavailable</html>").into_response();
    }

    next.run(request).await
}

type Params = Query<HashMap<String, String>>;

fn param(params: &HashMap<String, String>, key: &str) -> Option<i64> {
    params.get(key).and_then(|v| v.parse().ok())
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", TOKEN))
}

async fn profile(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Authentication credentials were not provided."})),
        )
            .into_response();
    }
    Json(json!({
        "id": 5,
        "username": "staff01",
        "first_name": "Mona",
        "last_name": "Adel",
        "role": "STAFF_AFFAIRS"
    }))
    .into_response()
}

async fn departments() -> Json<Value> {
    // Bare array; Civil and Architecture omit `has_specializations`.
    Json(json!([
        {"id": ELECTRICAL, "name": "قسم الهندسة الكهربية", "code": "ELEC", "has_specializations": true},
        {"id": CIVIL, "name": "قسم الهندسة المدنية", "code": "CIV"},
        {"id": ARCHITECTURE, "name": "قسم العمارة", "code": "ARCH"}
    ]))
}

async fn years() -> Json<Value> {
    // Paginated envelope.
    Json(json!({
        "count": 3,
        "next": null,
        "previous": null,
        "results": [
            {"id": CLOSED_YEAR, "name": "2024-2025", "status": "CLOSED", "is_current": false},
            {"id": OPEN_YEAR, "name": "2025-2026", "status": "OPEN", "is_current": true},
            {"id": 3, "name": "2026-2027", "status": "OPEN", "is_current": false}
        ]
    }))
}

fn all_levels() -> Vec<Value> {
    vec![
        json!({"id": ELEC_FIRST, "name": "FIRST", "department": ELECTRICAL, "academic_year": OPEN_YEAR}),
        json!({"id": ELEC_SECOND, "name": "SECOND", "department": ELECTRICAL, "academic_year": OPEN_YEAR}),
        json!({"id": CIVIL_FIRST, "name": "FIRST", "department": CIVIL, "academic_year": OPEN_YEAR}),
        json!({"id": CIVIL_SECOND_CLOSED, "name": "SECOND", "department": CIVIL, "academic_year": CLOSED_YEAR}),
    ]
}

async fn levels(Query(params): Params) -> Json<Value> {
    let department = param(&params, "department");
    let year = param(&params, "academic_year");
    let levels: Vec<Value> = all_levels()
        .into_iter()
        .filter(|l| department.is_none_or(|d| l["department"] == d))
        .filter(|l| year.is_none_or(|y| l["academic_year"] == y))
        .collect();
    Json(Value::Array(levels))
}

async fn specializations(Query(params): Params) -> Json<Value> {
    if param(&params, "department") != Some(ELECTRICAL) {
        return Json(json!([]));
    }
    Json(json!({
        "results": [
            {"id": POWER, "name": "قوى كهربية", "code": "PWR", "department": ELECTRICAL},
            {"id": 8, "name": "اتصالات", "code": "COM", "department": ELECTRICAL}
        ]
    }))
}

async fn subjects(Query(params): Params) -> Json<Value> {
    let department = param(&params, "department").unwrap_or_default();
    let level = params.get("level").cloned().unwrap_or_default();
    let semester = param(&params, "semester").unwrap_or(1);
    let specialization = param(&params, "specialization");

    let base = department * 100 + semester * 10;
    Json(json!([
        {
            "id": base + 1,
            "code": format!("S{}", base + 1),
            "name": format!("{} subject {}", level, semester),
            "department": department,
            "level": level,
            "semester": semester,
            "specialization": specialization,
            "is_elective": false
        }
    ]))
}

async fn students(Query(params): Params) -> Json<Value> {
    let level = param(&params, "level").unwrap_or_default();
    let specialization = param(&params, "specialization");
    let count = match specialization {
        Some(_) => 2,
        None => 3,
    };

    let students: Vec<Value> = (0..count)
        .map(|i| {
            let name: String = Name().fake();
            json!({
                "id": level * 1000 + i,
                "full_name": name,
                "national_id": format!("3010101{:07}", level * 1000 + i),
                "username": if i == 0 { Value::Null } else { json!(format!("s{}", i)) },
                "specialization": specialization
            })
        })
        .collect();
    Json(Value::Array(students))
}

async fn reset_password(Path(id): Path<i64>) -> Json<Value> {
    Json(json!({"message": format!("تم إعادة تعيين كلمة المرور للطالب {}", id)}))
}

async fn doctors() -> Json<Value> {
    Json(json!([
        {"id": 4, "full_name": "د. حسن محمود", "national_id": "27001011234567", "email": "hassan@example.edu"},
        {"id": 5, "full_name": "د. سارة علي", "email": null}
    ]))
}

async fn terms(Query(params): Params) -> Json<Value> {
    match param(&params, "academic_year") {
        Some(OPEN_YEAR) => Json(json!([
            {"id": FIRST_TERM, "name": "FIRST", "name_display": "الترم الأول", "academic_year": "2025-2026", "academic_year_id": OPEN_YEAR},
            {"id": SECOND_TERM, "name": "SECOND", "name_display": "الترم الثاني", "academic_year": "2025-2026", "academic_year_id": OPEN_YEAR}
        ])),
        Some(CLOSED_YEAR) => Json(json!([
            {"id": CLOSED_TERM, "name": "FIRST", "academic_year_id": CLOSED_YEAR}
        ])),
        _ => Json(json!([])),
    }
}

async fn assignments(State(state): State<Arc<MockState>>) -> Json<Value> {
    Json(Value::Array(state.assignments.lock().unwrap().clone()))
}

async fn assign_doctor(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    if body["term_id"] == CLOSED_TERM {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": CLOSED_YEAR_ERROR}))).into_response();
    }

    let mut assignments = state.assignments.lock().unwrap();
    let duplicate = assignments.iter().any(|a| {
        a["doctor_id"] == body["doctor_id"]
            && a["subject_id"] == body["subject_id"]
            && a["term_id"] == body["term_id"]
    });
    if duplicate {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": DUPLICATE_ASSIGNMENT_ERROR})),
        )
            .into_response();
    }

    let id = assignments.len() as i64 + 1;
    assignments.push(json!({
        "id": id,
        "doctor_id": body["doctor_id"],
        "subject_id": body["subject_id"],
        "term_id": body["term_id"],
        "doctor_name": "د. حسن محمود",
        "subject_name": "Power Systems",
        "subject_code": "EE201",
        "level_name": "SECOND",
        "grading_template": "Standard"
    }));

    (
        StatusCode::CREATED,
        Json(json!({"message": "تم تعيين الدكتور بنجاح", "offering_id": id})),
    )
        .into_response()
}

fn template_json(id: i64, name: &str, weights: [u32; 5], is_default: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "attendance_weight": weights[0],
        "quizzes_weight": weights[1],
        "coursework_weight": weights[2],
        "midterm_weight": weights[3],
        "final_weight": weights[4],
        "attendance_slots": 14,
        "quiz_count": 2,
        "is_default": is_default
    })
}

fn weight_total(body: &Value) -> u64 {
    [
        "attendance_weight",
        "quizzes_weight",
        "coursework_weight",
        "midterm_weight",
        "final_weight",
    ]
    .iter()
    .map(|k| body[*k].as_u64().unwrap_or(0))
    .sum()
}

async fn list_templates(State(state): State<Arc<MockState>>) -> Json<Value> {
    Json(Value::Array(state.templates.lock().unwrap().clone()))
}

async fn create_template(State(state): State<Arc<MockState>>, Json(mut body): Json<Value>) -> Response {
    if weight_total(&body) != 100 {
        return (StatusCode::BAD_REQUEST, Json(json!({"detail": "weights must sum to 100"})))
            .into_response();
    }
    let mut templates = state.templates.lock().unwrap();
    body["id"] = json!(templates.len() as i64 + 1);
    templates.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn update_template(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    Json(mut body): Json<Value>,
) -> Response {
    let mut templates = state.templates.lock().unwrap();
    let Some(existing) = templates.iter_mut().find(|t| t["id"] == id) else {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))).into_response();
    };
    body["id"] = json!(id);
    *existing = body.clone();
    Json(body).into_response()
}

async fn upload_grades(State(state): State<Arc<MockState>>, mut multipart: Multipart) -> Response {
    let mut fields = HashMap::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.unwrap_or_default();
        match file_name {
            Some(file_name) => {
                fields.insert("file_name".to_string(), file_name);
                fields.insert(name, format!("{} bytes", bytes.len()));
            }
            None => {
                fields.insert(name, String::from_utf8_lossy(&bytes).into_owned());
            }
        }
    }

    let complete = ["file", "level_id", "grade_type"]
        .iter()
        .all(|k| fields.contains_key(*k));
    state.uploads.lock().unwrap().push(fields);

    if !complete {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "يرجى رفع ملف"}))).into_response();
    }

    Json(json!({
        "message": "تم رفع الدرجات بنجاح",
        "errors": ["الصف 4: الرقم القومي غير موجود"]
    }))
    .into_response()
}

async fn pending_grades() -> Json<Value> {
    Json(json!([
        {
            "level_id": ELEC_SECOND,
            "level_name": "الفرقة الثانية",
            "department": "قسم الهندسة الكهربية",
            "academic_year": "2025-2026",
            "pending_count": 42,
            "midterm_count": 40,
            "final_count": 2
        }
    ]))
}

async fn approve_grades(State(state): State<Arc<MockState>>, Path(level_id): Path<i64>) -> Json<Value> {
    state.approved.lock().unwrap().push(level_id);
    Json(json!({"message": "تم اعتماد الدرجات", "approved_count": 42}))
}
