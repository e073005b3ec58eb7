use serde::Serialize;

/// Body for `POST pay/getCurrencyRates`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuery {
    pub source: String,
    pub amount: u32,
    pub currency_list: Vec<String>,
    pub fixed_decimal: bool,
}

/// Envelope for `POST pay/addPayment`.
#[derive(Debug, Serialize)]
pub struct PaymentEnvelope {
    pub data: PaymentRequest,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub currency: String,
    pub amount: f64,
    pub payment_type: String,
}
