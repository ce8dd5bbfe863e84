use crate::{data_types::config::TrackerSettings, routing::api::RoutingApi};

#[derive(PartialEq, Copy, Clone)]
pub enum Required {
    RoutingApi,
    Settings,
}

pub struct Facilities<'a> {
    routing_api: Option<&'a RoutingApi>,
    settings: Option<&'a TrackerSettings>,
}

impl<'a> Facilities<'a> {
    pub fn routing_api(&self) -> &'a RoutingApi {
        self.routing_api.unwrap()
    }

    pub fn settings(&self) -> &'a TrackerSettings {
        self.settings.unwrap()
    }

    pub fn check(&self, required: Vec<Required>) {
        for depend in &required {
            match depend {
                Required::RoutingApi => {
                    self.routing_api.expect("Expecting routing API");
                }
                Required::Settings => {
                    self.settings.expect("Expecting tracker settings");
                }
            }
        }
    }
}

pub struct DependenciesBuilder<'a> {
    dependencies: Facilities<'a>,
}

impl<'a> DependenciesBuilder<'a> {
    pub fn new() -> Self {
        Self {
            dependencies: Facilities {
                routing_api: None,
                settings: None,
            },
        }
    }

    pub fn with_routing_api(
        &'a mut self,
        routing_api: &'a RoutingApi,
    ) -> &'a mut DependenciesBuilder<'a> {
        self.dependencies.routing_api = Some(routing_api);
        self
    }

    pub fn with_settings(
        &'a mut self,
        settings: &'a TrackerSettings,
    ) -> &'a mut DependenciesBuilder<'a> {
        self.dependencies.settings = Some(settings);
        self
    }

    pub fn build(&mut self) -> &mut Facilities<'a> {
        &mut self.dependencies
    }
}
