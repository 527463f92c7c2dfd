use crate::api::{Paged, TenantListQuery, TenantReader, TenantWriter};
use crate::domain::types::AccessToken;
use crate::dto::PageData;
use crate::dto::tenants::{TenantsPageData, TenantsQuery};
use crate::forms::tenants::{TenantForm, TenantIntent};
use crate::pagination::PaginationMeta;
use crate::services::{
    ActionReply, ServiceResult, action_error, loader_error, parse_intent,
};

/// Loads one page of tenants, optionally filtered by `search`.
pub async fn load_tenants_page<A>(
    api: &A,
    token: &AccessToken,
    query: TenantsQuery,
) -> ServiceResult<TenantsPageData>
where
    A: TenantReader + ?Sized,
{
    let pagination = query.paging.pagination();
    let search = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut list_query = TenantListQuery::new(pagination);
    if let Some(term) = &search {
        list_query = list_query.search(term.clone());
    }

    match api.list_tenants(token, list_query).await {
        Ok(Paged { items, pagination }) => Ok(TenantsPageData {
            tenants: items,
            pagination,
            search,
            error: None,
        }),
        Err(err) => {
            loader_error("Failed to list tenants", err)?;
            Ok(TenantsPageData {
                pagination: PaginationMeta::zeroed(pagination),
                search,
                ..TenantsPageData::failed("Failed to load tenants")
            })
        }
    }
}

/// Handles the create, update and delete intents of the tenants page.
pub async fn tenants_action<A>(
    api: &A,
    token: &AccessToken,
    body: &[u8],
) -> ServiceResult<ActionReply>
where
    A: TenantWriter + ?Sized,
{
    match parse_intent::<TenantForm, TenantIntent>(body)? {
        TenantIntent::Create(tenant) => {
            api.create_tenant(token, &tenant)
                .await
                .map_err(|err| action_error("Failed to create tenant", err))?;
            Ok(ActionReply::success("Tenant created successfully"))
        }
        TenantIntent::Update { id, updates } => {
            api.update_tenant(token, id, &updates)
                .await
                .map_err(|err| action_error("Failed to update tenant", err))?;
            Ok(ActionReply::success("Tenant updated successfully"))
        }
        TenantIntent::Delete(id) => {
            api.delete_tenant(token, id)
                .await
                .map_err(|err| action_error("Failed to delete tenant", err))?;
            Ok(ActionReply::success("Tenant deleted successfully"))
        }
    }
}
