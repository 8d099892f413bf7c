use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct FunctionInfo {
    pub name: String,
    pub params: String,
    #[serde(rename = "return")]
    pub return_annotation: String,
    pub body: String,
}
