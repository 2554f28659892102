use crate::{config::UpstreamConfig, domain::response::relay::Relay};
use anyhow::{Context as AnyhowContext, Result};
use axum::http::HeaderMap;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use serde_json::Value;
use shared::{
    errors::GatewayError,
    utils::{HeaderInjector, Method, Metrics, Status, TracingContext},
};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};
use uuid::Uuid;

/// HTTP client for the upstream API.
///
/// Attaches the caller's upstream credential as a bearer token, injects
/// trace-context headers, and translates every failure into a
/// [`GatewayError`] the normalizer can unpack. 2xx replies come back as a
/// [`Relay`] so handlers can hand the status and body on unchanged. The
/// credential only ever travels on the outbound call; it is never part of
/// what a handler returns.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    metrics: Arc<Mutex<Metrics>>,
}

impl UpstreamClient {
    pub async fn new(
        config: &UpstreamConfig,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
    ) -> Result<Self> {
        registry.lock().await.register(
            "upstream_client_request_counter",
            "Total number of requests proxied to the upstream API",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "upstream_client_request_duration",
            "Histogram of upstream request durations",
            metrics.lock().await.request_duration.clone(),
        );

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build upstream HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            metrics,
        })
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("upstream-client")
    }

    fn start_tracing(&self, operation_name: &'static str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name)
            .with_kind(SpanKind::Client)
            .with_attributes(attributes)
            .start(&tracer);

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name)],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    async fn complete_tracing(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", if is_success { "SUCCESS" } else { "ERROR" }),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("Operation completed successfully: {message}");
        } else {
            error!("Operation failed: {message}");
        }

        self.metrics.lock().await.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }

    fn trace_headers(&self, cx: &Context) -> HeaderMap {
        let mut headers = HeaderMap::new();
        global::get_text_map_propagator(|propagator| {
            propagator.inject_context(cx, &mut HeaderInjector(&mut headers))
        });
        headers
    }

    /// Issue one call to the upstream API.
    ///
    /// `token` is the session's upstream credential; `query` pairs are
    /// encoded by the client so raw search input cannot mangle the URL.
    pub async fn request(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<Relay, GatewayError> {
        let tracing_ctx = self.start_tracing(
            operation,
            vec![
                KeyValue::new("component", "upstream-client"),
                KeyValue::new("http.method", method_name(&method)),
                KeyValue::new("http.path", path.to_string()),
            ],
        );

        let url = format!("{}{}", self.base_url, path);
        let mut request = match method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        };

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        request = request
            .header("x-request-id", Uuid::new_v4().to_string())
            .headers(self.trace_headers(&tracing_ctx.cx));

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                self.complete_tracing(&tracing_ctx, method, false, &e.to_string())
                    .await;
                return Err(GatewayError::transport(e));
            }
        };

        let status = response.status();

        if status.is_success() {
            match response.json::<Value>().await {
                Ok(body) => {
                    self.complete_tracing(&tracing_ctx, method, true, "upstream call succeeded")
                        .await;
                    Ok(Relay { status, body })
                }
                Err(e) => {
                    self.complete_tracing(&tracing_ctx, method, false, &e.to_string())
                        .await;
                    Err(GatewayError::transport(e))
                }
            }
        } else {
            let message = upstream_message(response).await;
            self.complete_tracing(
                &tracing_ctx,
                method,
                false,
                message.as_deref().unwrap_or("no upstream message"),
            )
            .await;
            Err(GatewayError::Upstream {
                status: status.as_u16(),
                message,
            })
        }
    }

    pub async fn get(
        &self,
        operation: &'static str,
        path: &str,
        token: Option<&str>,
    ) -> Result<Relay, GatewayError> {
        self.request(operation, Method::Get, path, &[], None, token)
            .await
    }

    pub async fn get_with_query(
        &self,
        operation: &'static str,
        path: &str,
        query: &[(&str, String)],
        token: Option<&str>,
    ) -> Result<Relay, GatewayError> {
        self.request(operation, Method::Get, path, query, None, token)
            .await
    }

    pub async fn post(
        &self,
        operation: &'static str,
        path: &str,
        body: &Value,
        token: Option<&str>,
    ) -> Result<Relay, GatewayError> {
        self.request(operation, Method::Post, path, &[], Some(body), token)
            .await
    }

    pub async fn put(
        &self,
        operation: &'static str,
        path: &str,
        body: &Value,
        token: Option<&str>,
    ) -> Result<Relay, GatewayError> {
        self.request(operation, Method::Put, path, &[], Some(body), token)
            .await
    }
}

fn method_name(method: &Method) -> &'static str {
    match method {
        Method::Get => "GET",
        Method::Post => "POST",
        Method::Put => "PUT",
        Method::Delete => "DELETE",
    }
}

/// Best-effort extraction of the upstream's error message: the JSON
/// `message` field when present, the raw body text otherwise.
async fn upstream_message(response: reqwest::Response) -> Option<String> {
    let text = response.text().await.ok()?;

    if let Ok(body) = serde_json::from_str::<Value>(&text)
        && let Some(message) = body.get("message").and_then(Value::as_str)
    {
        return Some(message.to_string());
    }

    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
