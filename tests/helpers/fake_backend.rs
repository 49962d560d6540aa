// ==========================================
// 内存假后端 - 用于集成测试
// ==========================================
// 实现 Transport,按 REST 接口约定响应:
//   POST /supplies        → 201
//   DELETE /supplies/{id} → 204
//   POST /inventory/in|out → 201; 库存不足/补给品不存在 → 400
//   未知 id               → 404
// 所有请求都会被记录,便于断言"未发出请求"
// ==========================================

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use reqwest::{Method, StatusCode};
use serde::Serialize;

use supply_manager::client::{ApiRequest, ApiResponse, ClientResult, RequestBody, Transport};
use supply_manager::domain::{
    InventoryTransaction, InventoryTransactionRequest, Supply, SupplyFormData, TransactionType,
};

/// 已记录的请求
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
}

/// 已接收的上传文件
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedUpload {
    pub field: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
struct BackendState {
    supplies: BTreeMap<i64, Supply>,
    transactions: Vec<InventoryTransaction>,
    next_supply_id: i64,
    next_transaction_id: i64,
    requests: Vec<RecordedRequest>,
    uploads: Vec<ReceivedUpload>,
    export_bytes: Vec<u8>,
    /// (方法, 路径) → 强制返回的状态码
    failures: Vec<(Method, String, StatusCode)>,
}

pub struct FakeBackend {
    state: Mutex<BackendState>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(BackendState {
                next_supply_id: 1,
                next_transaction_id: 1,
                export_bytes: b"PK\x03\x04fake-workbook".to_vec(),
                ..BackendState::default()
            }),
        }
    }

    /// 直接写入一条补给品（不记录请求）
    pub fn seed_supply(&self, data: SupplyFormData) -> Supply {
        let mut state = self.state.lock().unwrap();
        insert_supply(&mut state, data)
    }

    /// 指定方法+路径的请求强制失败
    pub fn fail(&self, method: Method, path: &str, status: StatusCode) {
        self.state
            .lock()
            .unwrap()
            .failures
            .push((method, path.to_string(), status));
    }

    /// 解除所有强制失败
    pub fn recover(&self) {
        self.state.lock().unwrap().failures.clear();
    }

    pub fn set_export_bytes(&self, bytes: Vec<u8>) {
        self.state.lock().unwrap().export_bytes = bytes;
    }

    pub fn supply(&self, id: i64) -> Option<Supply> {
        self.state.lock().unwrap().supplies.get(&id).cloned()
    }

    pub fn supplies(&self) -> Vec<Supply> {
        self.state.lock().unwrap().supplies.values().cloned().collect()
    }

    pub fn transactions(&self) -> Vec<InventoryTransaction> {
        self.state.lock().unwrap().transactions.clone()
    }

    pub fn uploads(&self) -> Vec<ReceivedUpload> {
        self.state.lock().unwrap().uploads.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// 指定方法的请求次数
    pub fn count(&self, method: Method) -> usize {
        self.requests().iter().filter(|r| r.method == method).count()
    }

    /// 指定方法+路径的请求次数
    pub fn count_path(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let mut state = self.state.lock().unwrap();
        state.requests.push(RecordedRequest {
            method: request.method.clone(),
            path: request.path.clone(),
        });

        if let Some((_, _, status)) = state
            .failures
            .iter()
            .find(|(m, p, _)| *m == request.method && *p == request.path)
        {
            return ApiResponse::new(*status, b"forced failure".to_vec());
        }

        let segments: Vec<&str> = request
            .path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match (request.method.clone(), segments.as_slice()) {
            (Method::GET, ["supplies"]) => {
                let supplies: Vec<Supply> = state.supplies.values().cloned().collect();
                json_response(StatusCode::OK, &supplies)
            }
            (Method::POST, ["supplies"]) => match request.json_body::<SupplyFormData>() {
                Ok(data) => {
                    let created = insert_supply(&mut state, data);
                    json_response(StatusCode::CREATED, &created)
                }
                Err(_) => empty(StatusCode::BAD_REQUEST),
            },
            (Method::GET, ["supplies", "export"]) => {
                ApiResponse::new(StatusCode::OK, state.export_bytes.clone())
            }
            (Method::POST, ["supplies", "import"]) => match &request.body {
                RequestBody::File(part) => {
                    state.uploads.push(ReceivedUpload {
                        field: part.field.clone(),
                        file_name: part.file_name.clone(),
                        bytes: part.bytes.clone(),
                    });
                    ApiResponse::new(StatusCode::OK, b"Import successful".to_vec())
                }
                _ => empty(StatusCode::BAD_REQUEST),
            },
            (method, ["supplies", id]) => {
                let Ok(id) = id.parse::<i64>() else {
                    return empty(StatusCode::BAD_REQUEST);
                };
                handle_supply_item(&mut state, method, id, request)
            }
            (Method::GET, ["inventory"]) => json_response(StatusCode::OK, &state.transactions),
            (Method::POST, ["inventory", direction @ ("in" | "out")]) => {
                let direction = if *direction == "in" {
                    TransactionType::In
                } else {
                    TransactionType::Out
                };
                match request.json_body::<InventoryTransactionRequest>() {
                    Ok(body) => record_movement(&mut state, direction, body),
                    Err(_) => empty(StatusCode::BAD_REQUEST),
                }
            }
            (Method::GET, ["inventory", "supply", supply_id]) => {
                let Ok(supply_id) = supply_id.parse::<i64>() else {
                    return empty(StatusCode::BAD_REQUEST);
                };
                let history: Vec<InventoryTransaction> = state
                    .transactions
                    .iter()
                    .filter(|tx| tx.supply_id == supply_id)
                    .cloned()
                    .collect();
                json_response(StatusCode::OK, &history)
            }
            _ => empty(StatusCode::NOT_FOUND),
        }
    }
}

#[async_trait]
impl Transport for FakeBackend {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        self.handle(&request).error_for_status()
    }
}

fn handle_supply_item(
    state: &mut BackendState,
    method: Method,
    id: i64,
    request: &ApiRequest,
) -> ApiResponse {
    match method {
        Method::GET => match state.supplies.get(&id) {
            Some(supply) => json_response(StatusCode::OK, supply),
            None => empty(StatusCode::NOT_FOUND),
        },
        Method::PUT => {
            let Ok(data) = request.json_body::<SupplyFormData>() else {
                return empty(StatusCode::BAD_REQUEST);
            };
            match state.supplies.get_mut(&id) {
                Some(supply) => {
                    supply.name = data.name;
                    supply.quantity = data.quantity;
                    supply.unit_price = data.unit_price;
                    supply.category = data.category;
                    supply.updated_at = Some(now());
                    json_response(StatusCode::OK, &*supply)
                }
                None => empty(StatusCode::NOT_FOUND),
            }
        }
        Method::DELETE => match state.supplies.remove(&id) {
            Some(_) => empty(StatusCode::NO_CONTENT),
            None => empty(StatusCode::NOT_FOUND),
        },
        _ => empty(StatusCode::METHOD_NOT_ALLOWED),
    }
}

fn record_movement(
    state: &mut BackendState,
    direction: TransactionType,
    body: InventoryTransactionRequest,
) -> ApiResponse {
    if body.quantity <= 0 {
        return empty(StatusCode::BAD_REQUEST);
    }
    let Some(supply) = state.supplies.get_mut(&body.supply_id) else {
        return empty(StatusCode::BAD_REQUEST);
    };

    match direction {
        TransactionType::In => supply.quantity += body.quantity,
        TransactionType::Out => {
            // Insufficient stock
            if supply.quantity < body.quantity {
                return empty(StatusCode::BAD_REQUEST);
            }
            supply.quantity -= body.quantity;
        }
    }
    supply.updated_at = Some(now());

    let transaction = InventoryTransaction {
        id: state.next_transaction_id,
        supply_id: body.supply_id,
        transaction_type: direction,
        quantity: body.quantity,
        transaction_date: Some(now()),
        note: body.note,
    };
    state.next_transaction_id += 1;
    state.transactions.push(transaction.clone());
    json_response(StatusCode::CREATED, &transaction)
}

fn insert_supply(state: &mut BackendState, data: SupplyFormData) -> Supply {
    let supply = Supply {
        id: state.next_supply_id,
        name: data.name,
        quantity: data.quantity,
        unit_price: data.unit_price,
        category: data.category,
        created_at: Some(now()),
        updated_at: Some(now()),
    };
    state.next_supply_id += 1;
    state.supplies.insert(supply.id, supply.clone());
    supply
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn json_response<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> ApiResponse {
    ApiResponse::new(status, serde_json::to_vec(value).unwrap())
}

fn empty(status: StatusCode) -> ApiResponse {
    ApiResponse::new(status, Vec::new())
}
