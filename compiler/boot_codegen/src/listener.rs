//! Event listener extraction.
//!
//! Every entity's runtime type is scanned for methods carrying a listener
//! declaration. Each such method binds to the first listener factory that
//! supports it. Bindings are re-emitted through one registrar:
//!
//! ```text
//! EventListenerRegistrar eventListenerRegistrar = new EventListenerRegistrar();
//! eventListenerRegistrar.register(context, EventListenerMetadata.forAnnotatedMethod(
//!     "bean", Owner.class, ["factory", ]"method"[, Param.class...]));
//! ```
//!
//! (The register call is emitted on a single line.)

use tracing::{debug, trace};

use boot_ir::{
    well_known, ContainerSnapshot, TypeDescriptor, TypeName, TypeResolutionError,
    SCOPED_TARGET_PREFIX,
};

use crate::java::literal::string_literal;
use crate::java::CodeBlock;
use crate::registration::LocalNames;
use crate::type_encoder::class_literal;

/// One listener method bound to a factory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListenerBinding {
    pub entity: String,
    pub owner: TypeName,
    pub method: String,
    pub parameters: Vec<TypeDescriptor>,
    /// The binding factory, unless it is the default one.
    pub factory: Option<String>,
}

impl ListenerBinding {
    /// Every type the register call names: the owner, then parameter types.
    pub fn type_names(&self) -> Vec<TypeName> {
        let mut out = vec![self.owner.clone()];
        for parameter in &self.parameters {
            parameter.collect_type_names(&mut out);
        }
        out
    }
}

/// Result of scanning one entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListenerScan {
    Bound(Vec<ListenerBinding>),
    Skipped { reason: String },
}

/// Scan results for a whole container, in enumeration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListenerReport {
    pub scans: Vec<(String, ListenerScan)>,
}

impl ListenerReport {
    /// All bindings in order.
    pub fn bindings(&self) -> impl Iterator<Item = &ListenerBinding> {
        self.scans.iter().flat_map(|(_, scan)| match scan {
            ListenerScan::Bound(bindings) => bindings.as_slice(),
            ListenerScan::Skipped { .. } => &[][..],
        })
    }

    /// Entities whose scan was skipped, with the reason.
    pub fn skipped(&self) -> impl Iterator<Item = (&str, &str)> {
        self.scans.iter().filter_map(|(name, scan)| match scan {
            ListenerScan::Skipped { reason } => Some((name.as_str(), reason.as_str())),
            ListenerScan::Bound(_) => None,
        })
    }

    pub fn has_bindings(&self) -> bool {
        self.bindings().next().is_some()
    }
}

/// Scans a snapshot for listener methods.
pub struct EventListenerExtractor<'a> {
    snapshot: &'a dyn ContainerSnapshot,
}

impl<'a> EventListenerExtractor<'a> {
    pub fn new(snapshot: &'a dyn ContainerSnapshot) -> Self {
        EventListenerExtractor { snapshot }
    }

    /// Scan every entity in `names`, in order.
    pub fn extract<'n>(&self, names: impl IntoIterator<Item = &'n String>) -> ListenerReport {
        let scans = names
            .into_iter()
            .filter_map(|name| self.scan(name).map(|scan| (name.clone(), scan)))
            .collect();
        ListenerReport { scans }
    }

    /// Scan one entity. Proxy targets are not scanned at all.
    pub fn scan(&self, name: &str) -> Option<ListenerScan> {
        if name.starts_with(SCOPED_TARGET_PREFIX) {
            return None;
        }
        let scan = match self.resolve_owner(name) {
            Ok(Some(owner)) => ListenerScan::Bound(self.bind(name, &owner)),
            Ok(None) => ListenerScan::Bound(Vec::new()),
            Err(error) => ListenerScan::Skipped {
                reason: error.to_string(),
            },
        };
        trace!(entity = name, ?scan, "scanned for listeners");
        Some(scan)
    }

    /// The runtime type, looking through one scoped proxy.
    ///
    /// A proxy whose target cannot be resolved keeps the proxy type.
    fn resolve_owner(&self, name: &str) -> Result<Option<TypeName>, TypeResolutionError> {
        let Some(ty) = self.snapshot.target_type(name)? else {
            return Ok(None);
        };
        let scoped = well_known::type_name(well_known::SCOPED_OBJECT);
        if !self.snapshot.catalog().is_subtype(&ty, &scoped) {
            return Ok(Some(ty));
        }
        let target_name = format!("{SCOPED_TARGET_PREFIX}{name}");
        let target = match self.snapshot.target_type(&target_name) {
            Ok(target) => target,
            Err(error) => {
                debug!(entity = name, %error, "scoped target unresolvable, keeping proxy type");
                None
            }
        };
        Ok(Some(target.unwrap_or(ty)))
    }

    fn bind(&self, name: &str, owner: &TypeName) -> Vec<ListenerBinding> {
        let catalog = self.snapshot.catalog();
        let user = owner.user_class();
        let Some(class) = catalog.get(owner).or_else(|| catalog.get(&user)) else {
            return Vec::new();
        };

        let mut bindings = Vec::new();
        for method in class.methods.iter().filter(|method| method.listener.is_some()) {
            let factory = self
                .snapshot
                .listener_factories()
                .iter()
                .find(|factory| factory.supports(method));
            let Some(factory) = factory else {
                debug!(
                    entity = name,
                    method = %method.name,
                    "no listener factory supports method"
                );
                continue;
            };
            bindings.push(ListenerBinding {
                entity: name.to_owned(),
                owner: user.clone(),
                method: method.name.clone(),
                parameters: method
                    .parameters
                    .iter()
                    .map(|parameter| parameter.ty.clone())
                    .collect(),
                factory: (!factory.is_default()).then(|| factory.name.clone()),
            });
        }
        bindings
    }
}

/// Statements registering `bindings`; empty when there are none.
pub fn generate_listener_registrations<'b>(
    bindings: impl IntoIterator<Item = &'b ListenerBinding>,
    locals: &mut LocalNames,
) -> Vec<CodeBlock> {
    let mut bindings = bindings.into_iter().peekable();
    if bindings.peek().is_none() {
        return Vec::new();
    }
    let registrar = well_known::type_name(well_known::EVENT_LISTENER_REGISTRAR);
    let metadata = well_known::type_name(well_known::EVENT_LISTENER_METADATA);
    let variable = locals.fresh("eventListenerRegistrar");

    let mut statements = vec![CodeBlock::new()
        .with_type(&registrar)
        .with(&format!(" {variable} = new "))
        .with_type(&registrar)
        .with("()")];
    for binding in bindings {
        let mut call = CodeBlock::of(format!("{variable}.register(context, "));
        call.push_type(&metadata)
            .push(".forAnnotatedMethod(")
            .push(&string_literal(&binding.entity))
            .push(", ")
            .push_type(&binding.owner)
            .push(".class, ");
        if let Some(factory) = &binding.factory {
            call.push(&string_literal(factory)).push(", ");
        }
        call.push(&string_literal(&binding.method));
        for parameter in &binding.parameters {
            call.push(", ").push_block(&class_literal(parameter));
        }
        call.push("))");
        statements.push(call);
    }
    statements
}
