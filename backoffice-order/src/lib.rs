pub mod models;
pub mod pricing;
pub mod changes;
pub mod session;
pub mod invoice;
pub mod manager;

pub use models::{CustomerInfo, LineItem, Order, OrderPricing, OrderStatus, OrderUpdateRequest, PricingParameters, PricingSummary};
pub use pricing::{PricingConfig, PricingEngine};
pub use changes::{CartEditor, ChangeError, PricingParameter, QuantityDelta};
pub use session::{CustomerField, EditSession, OrderEdit};
pub use invoice::Invoice;
pub use manager::{OrderError, OrderManager, OrderRow};
