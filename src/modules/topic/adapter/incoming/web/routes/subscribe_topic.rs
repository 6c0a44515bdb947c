use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::{
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::SubscribeTopicError,
    user::domain::entities::UserId, AppState,
};

#[derive(Debug, Deserialize)]
pub struct SubscribeTopicRequest {
    pub user_id: Uuid,
}

#[post("/api/topics/{topic_id}/subscribers")]
pub async fn subscribe_topic_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<SubscribeTopicRequest>,
) -> impl Responder {
    let topic_id = path.into_inner();
    let user_id = UserId::from(payload.user_id);

    match data
        .subscribe_topic_use_case
        .execute(topic_id, user_id)
        .await
    {
        Ok(subscription) => ApiResponse::success(subscription),
        Err(SubscribeTopicError::TopicNotFound) => ApiResponse::topic_not_found(),
        Err(SubscribeTopicError::RepositoryError(msg)) => {
            error!(%topic_id, %user_id, "Repository error subscribing to topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::{
        tests::support::app_state_builder::TestAppStateBuilder,
        topic::application::ports::incoming::use_cases::{
            SubscribeTopicUseCase, TopicSubscription,
        },
    };

    #[derive(Clone)]
    struct MockSubscribeTopicUseCase {
        result: Result<TopicSubscription, SubscribeTopicError>,
    }

    #[async_trait]
    impl SubscribeTopicUseCase for MockSubscribeTopicUseCase {
        async fn execute(
            &self,
            _topic_id: Uuid,
            _user_id: UserId,
        ) -> Result<TopicSubscription, SubscribeTopicError> {
            self.result.clone()
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    async fn subscribe(
        state: web::Data<AppState>,
        topic_id: Uuid,
        body: serde_json::Value,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(crate::shared::api::custom_json_config())
                .service(subscribe_topic_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/topics/{topic_id}/subscribers"))
            .set_json(body)
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn subscribe_success_returns_subscription() {
        let topic_id = Uuid::new_v4();
        let user_id = UserId::from(Uuid::new_v4());
        let state = TestAppStateBuilder::default()
            .with_subscribe_topic(MockSubscribeTopicUseCase {
                result: Ok(TopicSubscription {
                    topic_id,
                    user_id,
                    subscribed: true,
                    subscriber_count: 3,
                }),
            })
            .build();

        let resp = subscribe(state, topic_id, serde_json::json!({ "user_id": user_id })).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["topic_id"], topic_id.to_string());
        assert_eq!(json["data"]["user_id"], user_id.to_string());
        assert_eq!(json["data"]["subscribed"], true);
        assert_eq!(json["data"]["subscriber_count"], 3);
    }

    #[actix_web::test]
    async fn subscribe_unknown_topic_returns_not_found() {
        let state = TestAppStateBuilder::default()
            .with_subscribe_topic(MockSubscribeTopicUseCase {
                result: Err(SubscribeTopicError::TopicNotFound),
            })
            .build();

        let resp = subscribe(
            state,
            Uuid::new_v4(),
            serde_json::json!({ "user_id": Uuid::new_v4() }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "TOPIC_NOT_FOUND");
    }

    #[actix_web::test]
    async fn subscribe_repository_error_returns_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_subscribe_topic(MockSubscribeTopicUseCase {
                result: Err(SubscribeTopicError::RepositoryError("db down".into())),
            })
            .build();

        let resp = subscribe(
            state,
            Uuid::new_v4(),
            serde_json::json!({ "user_id": Uuid::new_v4() }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }

    #[actix_web::test]
    async fn subscribe_with_malformed_user_id_returns_validation_error() {
        let resp = subscribe(
            TestAppStateBuilder::default().build(),
            Uuid::new_v4(),
            serde_json::json!({ "user_id": "not-a-uuid" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn subscribe_without_user_id_returns_validation_error() {
        let resp = subscribe(
            TestAppStateBuilder::default().build(),
            Uuid::new_v4(),
            serde_json::json!({}),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[::core::prelude::v1::test]
    fn request_body_deserializes_user_id() {
        let user_id = Uuid::new_v4();

        let request: SubscribeTopicRequest =
            serde_json::from_value(serde_json::json!({ "user_id": user_id })).unwrap();

        assert_eq!(request.user_id, user_id);
    }
}
