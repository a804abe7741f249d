//! # Commands Module
//!
//! Request handlers exposed by the CLI.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── purchase.rs  ◄─── The purchase pipeline
//! ├── users.rs     ◄─── Directory dump
//! └── batch.rs     ◄─── JSON-lines driver over purchase()
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin / argv (JSON)                                                    │
//! │         │                                                               │
//! │         │ serde_json::from_str::<PurchaseRequest>                       │
//! │         ▼                                                               │
//! │  fn purchase(                                                           │
//! │      state: &ShopState,          ◄── Built once in main                │
//! │      request: &PurchaseRequest,  ◄── Decoded wire type                 │
//! │  ) -> Result<Receipt, ApiError>                                         │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  stdout: {"status":"success",...} or {"code":...,"class":...}           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod batch;
mod purchase;
mod users;

pub use batch::{handle_line, run_batch, BatchSummary, Response};
pub use purchase::purchase;
pub use users::list_users;
