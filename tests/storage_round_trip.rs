//! 在内存 SQLite 上跑迁移，验证写入请求 -> 记录 -> 响应的完整链路

use jcourse_api::entity::prelude::*;
use jcourse_api::entity::{teacher_evaluations, teachers};
use jcourse_api::models::FromPayload;
use jcourse_api::models::SerializeOptions;
use jcourse_api::models::reports::requests::CreateReportRequest;
use jcourse_api::models::teacher_evaluations::requests::CreateTeacherEvaluationRequest;
use jcourse_api::models::teachers::requests::CreateTeacherRequest;
use jcourse_api::models::teachers::responses::TeacherResponse;
use jcourse_api::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    FromQueryResult, QueryOrder, Set, Statement,
};
use serde_json::json;

async fn setup() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

async fn create_user(db: &DatabaseConnection, username: &str) -> i64 {
    let user = UserActiveModel {
        username: Set(username.to_string()),
        email: Set(format!("{username}@sjtu.edu.cn")),
        password_hash: Set("hash".to_string()),
        is_staff: Set(false),
        is_active: Set(true),
        date_joined: Set(1_700_000_000),
        last_login: Set(None),
        ..Default::default()
    };
    user.insert(db).await.unwrap().id
}

#[tokio::test]
async fn test_report_protected_fields_survive_storage() {
    let db = setup().await;
    let user_id = create_user(&db, "reporter").await;

    let payload = json!({
        "comment": "课程代码有误",
        "user": user_id + 100,
        "solved": true,
        "reply": "forged",
    });
    let request = CreateReportRequest::from_payload(&payload).unwrap();
    let stored = request
        .into_active_model(user_id, 1_700_000_000)
        .insert(&db)
        .await
        .unwrap();

    let fetched = Reports::find_by_id(stored.id).one(&db).await.unwrap().unwrap();
    assert!(!fetched.solved);

    let value = serde_json::to_value(fetched.into_response()).unwrap();
    assert_eq!(
        value,
        json!({
            "id": stored.id,
            "user": user_id,
            "comment": "课程代码有误",
            "created_at": "2023-11-14T22:13:20Z",
            "reply": "",
        })
    );
}

#[tokio::test]
async fn test_teacher_with_related_evaluations() {
    let db = setup().await;

    let teacher = CreateTeacherRequest::from_payload(&json!({"tid": "20001", "name": "赵老师"}))
        .unwrap()
        .into_active_model()
        .insert(&db)
        .await
        .unwrap();

    for (i, content) in ["讲得好", "给分高", "作业少"].iter().enumerate() {
        CreateTeacherEvaluationRequest::from_payload(&json!({
            "evaluation_content": content,
            "data_sources": "问卷",
        }))
        .unwrap()
        .into_active_model(teacher.id, 1_700_000_000 + i as i64)
        .insert(&db)
        .await
        .unwrap();
    }

    let rows = Teachers::find()
        .find_with_related(TeacherEvaluations)
        .order_by_asc(teachers::Column::Id)
        .order_by_asc(teacher_evaluations::Column::Id)
        .all(&db)
        .await
        .unwrap();

    let responses = TeacherResponse::from_related(rows, &SerializeOptions::default());
    assert_eq!(responses.len(), 1);

    let response = &responses[0];
    assert_eq!(response.evaluation_count, 3);
    assert_eq!(response.evaluation_count, response.evaluations.len() as i64);
    let contents: Vec<&str> = response
        .evaluations
        .iter()
        .map(|e| e.evaluation_content.as_str())
        .collect();
    assert_eq!(contents, ["讲得好", "给分高", "作业少"]);
    assert!(response.evaluations.iter().all(|e| e.teacher_name == "赵老师"));
}

#[tokio::test]
async fn test_category_count_comes_from_query() {
    let db = setup().await;

    CategoryActiveModel {
        name: Set("通识".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let rows = CategoryCount::find_by_statement(Statement::from_string(
        db.get_database_backend(),
        "SELECT id, name, 42 AS count FROM categories",
    ))
    .all(&db)
    .await
    .unwrap();

    assert_eq!(rows.len(), 1);
    let response = rows.into_iter().next().unwrap().into_response();
    assert_eq!(response.name, "通识");
    assert_eq!(response.count, 42);
}
