//! HTTP handlers for the Products API
//!
//! Every successful single-product response carries an `ETag` with the
//! quoted version and a `Location` pointing at the product. Updates must
//! present that version back in `If-Match`.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
    PathParam, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateOutcome, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Path the product resource is mounted at
pub const RESOURCE_PATH: &str = "/product";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            BadRequestValidationResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(RESOURCE_PATH, get(list_products).post(create_product))
        .route(
            &format!("{}/{{id}}", RESOURCE_PATH),
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

fn location(id: i32) -> String {
    format!("{}/{}", RESOURCE_PATH, id)
}

/// Render a product with its version headers
fn versioned(status: StatusCode, product: Product) -> Response {
    (
        status,
        [
            (header::ETAG, product.etag()),
            (header::LOCATION, location(product.id)),
        ],
        Json(product),
    )
        .into_response()
}

/// Extract the version a client claims to hold from `If-Match`.
///
/// Accepts the strong tag `"1"` and the bare `1`. `If-Match` uses strong
/// comparison, so weak tags (`W/"1"`), `*` and lists yield `None`.
fn if_match_version(headers: &HeaderMap) -> Option<i32> {
    let raw = headers.get(header::IF_MATCH)?.to_str().ok()?.trim();
    let raw = raw
        .strip_prefix('"')
        .and_then(|tag| tag.strip_suffix('"'))
        .unwrap_or(raw);
    raw.parse().ok()
}

/// List all products
#[utoipa::path(
    get,
    path = "/product",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.find_all().await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/product",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product,
            headers(
                ("ETag" = String, description = "Quoted product version"),
                ("Location" = String, description = "Product URL")
            )),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<Response> {
    let product = service.save(Product::new(input)).await?;
    Ok(versioned(StatusCode::CREATED, product))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product,
            headers(
                ("ETag" = String, description = "Quoted product version"),
                ("Location" = String, description = "Product URL")
            )),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(id): PathParam<i32>,
) -> ProductResult<Response> {
    let product = service
        .find_by_id(id)
        .await?
        .ok_or(ProductError::NotFound(id))?;
    Ok(versioned(StatusCode::OK, product))
}

/// Update a product, guarded by `If-Match`
#[utoipa::path(
    put,
    path = "/product/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID"),
        ("If-Match" = String, Header, description = "Current product version, e.g. \"1\"")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product,
            headers(
                ("ETag" = String, description = "Quoted new product version"),
                ("Location" = String, description = "Product URL")
            )),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(id): PathParam<i32>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Response> {
    let existing = service
        .find_by_id(id)
        .await?
        .ok_or(ProductError::NotFound(id))?;

    let expected = if_match_version(&headers);
    if expected != Some(existing.version) {
        return Err(ProductError::VersionConflict { id, expected });
    }

    let updated = existing.next_revision(input);
    match service.update(updated.clone(), existing.version).await? {
        UpdateOutcome::Applied => Ok(versioned(StatusCode::OK, updated)),
        UpdateOutcome::Stale => Err(ProductError::ConcurrentModification(id)),
        UpdateOutcome::Missing => Err(ProductError::StoreFailure(id)),
    }
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(id): PathParam<i32>,
) -> ProductResult<StatusCode> {
    if service.find_by_id(id).await?.is_none() {
        return Err(ProductError::NotFound(id));
    }

    if service.delete(id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ProductError::StoreFailure(id))
    }
}
