// Protobuf messages and client stub for the `pld.PldService` gRPC API.
//
// service PldService {
//   rpc CheckInBlacklist (CheckInBlackListReq) returns (CheckInBlackListRes);
// }

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckInBlackListReq {
    #[prost(string, tag = "1")]
    pub first_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub last_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub birthday: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct CheckInBlackListRes {
    #[prost(bool, tag = "1")]
    pub is_in_blacklist: bool,
}

pub mod pld_service_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::http::Uri;
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct PldServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl PldServiceClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> PldServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }

        pub async fn check_in_blacklist(
            &mut self,
            request: impl tonic::IntoRequest<super::CheckInBlackListReq>,
        ) -> std::result::Result<tonic::Response<super::CheckInBlackListRes>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/pld.PldService/CheckInBlacklist");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("pld.PldService", "CheckInBlacklist"));
            self.inner.unary(req, path, codec).await
        }
    }
}
