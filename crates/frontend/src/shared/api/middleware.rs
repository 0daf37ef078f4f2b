use std::rc::Rc;

use super::ApiRequest;
use crate::system::auth::storage::SessionStore;

/// Step of the request pipeline, run in order before the transport.
pub trait RequestMiddleware {
    fn prepare(&self, request: &mut ApiRequest);
}

/// Adds `Authorization: Bearer <token>` to protected calls.
///
/// The token is read from the session store at the moment of each call, so
/// a login or logout in between is picked up. `/auth/*` endpoints and
/// requests that already carry an `Authorization` header are left alone.
#[derive(Clone)]
pub struct BearerAuth {
    store: Rc<dyn SessionStore>,
}

impl BearerAuth {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }
}

impl RequestMiddleware for BearerAuth {
    fn prepare(&self, request: &mut ApiRequest) {
        if request.is_auth_endpoint() || request.has_header("Authorization") {
            return;
        }
        if let Some(token) = self.store.token() {
            request
                .headers
                .push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::MemoryStore;

    fn auth_header(request: &ApiRequest) -> Option<&str> {
        request
            .headers
            .iter()
            .find(|(n, _)| n == "Authorization")
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_decorates_protected_calls() {
        let store = Rc::new(MemoryStore::with_token("t-1"));
        let auth = BearerAuth::new(store.clone());

        let mut req = ApiRequest::get("/equipment");
        auth.prepare(&mut req);
        assert_eq!(auth_header(&req), Some("Bearer t-1"));

        store.set_token("t-2");
        let mut req = ApiRequest::get("/teams");
        auth.prepare(&mut req);
        assert_eq!(auth_header(&req), Some("Bearer t-2"));
    }

    #[test]
    fn test_skips_auth_endpoints_and_explicit_headers() {
        let auth = BearerAuth::new(Rc::new(MemoryStore::with_token("t-1")));

        let mut login = ApiRequest::post("/auth/login");
        auth.prepare(&mut login);
        assert!(login.headers.is_empty());

        let mut verify = ApiRequest::get("/auth/verify").bearer("other");
        auth.prepare(&mut verify);
        assert_eq!(verify.headers.len(), 1);
        assert_eq!(auth_header(&verify), Some("Bearer other"));
    }

    #[test]
    fn test_no_token_no_header() {
        let auth = BearerAuth::new(Rc::new(MemoryStore::default()));
        let mut req = ApiRequest::get("/equipment");
        auth.prepare(&mut req);
        assert!(req.headers.is_empty());
    }
}
