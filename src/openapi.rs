use utoipa::OpenApi;

use crate::dishes::dto::{DishAnswer, DishCreate, DishUpdate};
use crate::dto::{DeletedAnswer, ErrorDetail, ServiceInfo};
use crate::menus::dto::{MenuAnswer, MenuCreate, MenuUpdate};
use crate::submenus::dto::{SubmenuAnswer, SubmenuCreate, SubmenuUpdate};

pub const DOCS_PATH: &str = "/api/openapi";
pub const SPEC_PATH: &str = "/api/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::app::root,
        crate::menus::handlers::list_menus,
        crate::menus::handlers::create_menu,
        crate::menus::handlers::get_menu,
        crate::menus::handlers::update_menu,
        crate::menus::handlers::delete_menu,
        crate::submenus::handlers::list_submenus,
        crate::submenus::handlers::create_submenu,
        crate::submenus::handlers::get_submenu,
        crate::submenus::handlers::update_submenu,
        crate::submenus::handlers::delete_submenu,
        crate::dishes::handlers::list_dishes,
        crate::dishes::handlers::create_dish,
        crate::dishes::handlers::get_dish,
        crate::dishes::handlers::update_dish,
        crate::dishes::handlers::delete_dish,
    ),
    components(
        schemas(
            MenuCreate,
            MenuUpdate,
            MenuAnswer,
            SubmenuCreate,
            SubmenuUpdate,
            SubmenuAnswer,
            DishCreate,
            DishUpdate,
            DishAnswer,
            DeletedAnswer,
            ErrorDetail,
            ServiceInfo,
        )
    ),
    tags(
        (name = "service"),
        (name = "menus"),
        (name = "submenus"),
        (name = "dishes")
    )
)]
pub struct ApiDoc;
