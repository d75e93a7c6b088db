//! Effects - side effects declared by the reducer

#[derive(Debug, Clone)]
pub enum Effect {
    /// Read and decode the forecast payload at `path`
    LoadForecast { path: String },
}
