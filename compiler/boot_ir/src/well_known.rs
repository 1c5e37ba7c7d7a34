//! Well-known JDK and framework types.
//!
//! Binary names of the types generated code refers to, plus a small table of
//! built-in hierarchy facts so snapshots do not have to repeat the JDK and
//! container interfaces in their catalog.

use crate::catalog::Modifiers;
use crate::name::TypeName;

// JDK

pub const JAVA_LANG: &str = "java.lang";
pub const OBJECT: &str = "java.lang.Object";
pub const STRING: &str = "java.lang.String";
pub const THROWABLE: &str = "java.lang.Throwable";
pub const EXCEPTION: &str = "java.lang.Exception";
pub const RUNTIME_EXCEPTION: &str = "java.lang.RuntimeException";
pub const ERROR: &str = "java.lang.Error";
pub const COLLECTION: &str = "java.util.Collection";
pub const COLLECTORS: &str = "java.util.stream.Collectors";

// Container runtime

pub const OBJECT_PROVIDER: &str = "org.springframework.beans.factory.ObjectProvider";
pub const GENERIC_APPLICATION_CONTEXT: &str =
    "org.springframework.context.support.GenericApplicationContext";
pub const CONFIGURABLE_LISTABLE_BEAN_FACTORY: &str =
    "org.springframework.beans.factory.config.ConfigurableListableBeanFactory";
pub const CONFIGURABLE_ENVIRONMENT: &str = "org.springframework.core.env.ConfigurableEnvironment";
pub const ROOT_BEAN_DEFINITION: &str = "org.springframework.beans.factory.support.RootBeanDefinition";
pub const RESOLVABLE_TYPE: &str = "org.springframework.core.ResolvableType";
pub const SCOPED_OBJECT: &str = "org.springframework.aop.scope.ScopedObject";
pub const EVENT_LISTENER: &str = "org.springframework.context.event.EventListener";
pub const EVENT_LISTENER_REGISTRAR: &str = "org.springframework.context.event.EventListenerRegistrar";
pub const EVENT_LISTENER_METADATA: &str = "org.springframework.context.event.EventListenerMetadata";
pub const CONFIGURATION_CLASS_POST_PROCESSOR: &str =
    "org.springframework.context.annotation.ConfigurationClassPostProcessor";

/// Name of the listener factory every container registers by default.
pub const DEFAULT_LISTENER_FACTORY: &str =
    "org.springframework.context.event.internalEventListenerFactory";

// Bootstrap infrastructure

pub const BEAN_DEFINITION_CUSTOMIZERS: &str =
    "org.springframework.context.bootstrap.infrastructure.BeanDefinitionCustomizers";
pub const EXCEPTION_HANDLER: &str =
    "org.springframework.context.bootstrap.infrastructure.ExceptionHandler";

/// Build a [`TypeName`] for a top-level well-known type.
pub fn type_name(binary: &str) -> TypeName {
    match binary.rsplit_once('.') {
        Some((package, simple)) => TypeName::new(package, simple),
        None => TypeName::new("", binary),
    }
}

pub fn object() -> TypeName {
    type_name(OBJECT)
}

pub fn event_listener_annotation() -> TypeName {
    type_name(EVENT_LISTENER)
}

/// Hierarchy facts for a type the catalog does not need to spell out.
#[derive(Debug)]
pub struct Builtin {
    pub name: &'static str,
    pub modifiers: Modifiers,
    /// Transitive supertypes, excluding `java.lang.Object`.
    pub supertypes: &'static [&'static str],
}

const CLASS: Modifiers = Modifiers::PUBLIC;
const INTERFACE: Modifiers = Modifiers::PUBLIC.union(Modifiers::INTERFACE);
const ABSTRACT_CLASS: Modifiers = Modifiers::PUBLIC.union(Modifiers::ABSTRACT);
const FINAL_CLASS: Modifiers = Modifiers::PUBLIC.union(Modifiers::FINAL);

const SERIALIZABLE: &str = "java.io.Serializable";
const ITERABLE: &str = "java.lang.Iterable";
const LIST: &str = "java.util.List";
const SET: &str = "java.util.Set";
const BEAN_FACTORY: &str = "org.springframework.beans.factory.BeanFactory";
const LISTABLE_BEAN_FACTORY: &str = "org.springframework.beans.factory.ListableBeanFactory";
const HIERARCHICAL_BEAN_FACTORY: &str = "org.springframework.beans.factory.HierarchicalBeanFactory";
const BEAN_DEFINITION_REGISTRY: &str =
    "org.springframework.beans.factory.support.BeanDefinitionRegistry";
const ALIAS_REGISTRY: &str = "org.springframework.core.AliasRegistry";
const PROPERTY_RESOLVER: &str = "org.springframework.core.env.PropertyResolver";
const ENVIRONMENT: &str = "org.springframework.core.env.Environment";
const APPLICATION_CONTEXT: &str = "org.springframework.context.ApplicationContext";
const CONFIGURABLE_APPLICATION_CONTEXT: &str =
    "org.springframework.context.ConfigurableApplicationContext";

const APPLICATION_CONTEXT_SUPERTYPES: &[&str] = &[
    "org.springframework.core.env.EnvironmentCapable",
    LISTABLE_BEAN_FACTORY,
    HIERARCHICAL_BEAN_FACTORY,
    BEAN_FACTORY,
    "org.springframework.context.MessageSource",
    "org.springframework.context.ApplicationEventPublisher",
    "org.springframework.core.io.support.ResourcePatternResolver",
    "org.springframework.core.io.ResourceLoader",
];

static BUILTINS: &[Builtin] = &[
    // java.lang
    Builtin {
        name: OBJECT,
        modifiers: CLASS,
        supertypes: &[],
    },
    Builtin {
        name: STRING,
        modifiers: FINAL_CLASS,
        supertypes: &[SERIALIZABLE, "java.lang.Comparable", "java.lang.CharSequence"],
    },
    Builtin {
        name: ITERABLE,
        modifiers: INTERFACE,
        supertypes: &[],
    },
    Builtin {
        name: THROWABLE,
        modifiers: CLASS,
        supertypes: &[SERIALIZABLE],
    },
    Builtin {
        name: EXCEPTION,
        modifiers: CLASS,
        supertypes: &[THROWABLE, SERIALIZABLE],
    },
    Builtin {
        name: RUNTIME_EXCEPTION,
        modifiers: CLASS,
        supertypes: &[EXCEPTION, THROWABLE, SERIALIZABLE],
    },
    Builtin {
        name: ERROR,
        modifiers: CLASS,
        supertypes: &[THROWABLE, SERIALIZABLE],
    },
    Builtin {
        name: "java.lang.IllegalStateException",
        modifiers: CLASS,
        supertypes: &[RUNTIME_EXCEPTION, EXCEPTION, THROWABLE, SERIALIZABLE],
    },
    Builtin {
        name: "java.lang.IllegalArgumentException",
        modifiers: CLASS,
        supertypes: &[RUNTIME_EXCEPTION, EXCEPTION, THROWABLE, SERIALIZABLE],
    },
    Builtin {
        name: "java.lang.UnsupportedOperationException",
        modifiers: CLASS,
        supertypes: &[RUNTIME_EXCEPTION, EXCEPTION, THROWABLE, SERIALIZABLE],
    },
    Builtin {
        name: "java.lang.NullPointerException",
        modifiers: CLASS,
        supertypes: &[RUNTIME_EXCEPTION, EXCEPTION, THROWABLE, SERIALIZABLE],
    },
    Builtin {
        name: "java.lang.InterruptedException",
        modifiers: CLASS,
        supertypes: &[EXCEPTION, THROWABLE, SERIALIZABLE],
    },
    Builtin {
        name: "java.lang.ClassNotFoundException",
        modifiers: CLASS,
        supertypes: &[
            "java.lang.ReflectiveOperationException",
            EXCEPTION,
            THROWABLE,
            SERIALIZABLE,
        ],
    },
    Builtin {
        name: "java.io.IOException",
        modifiers: CLASS,
        supertypes: &[EXCEPTION, THROWABLE, SERIALIZABLE],
    },
    // java.util
    Builtin {
        name: COLLECTION,
        modifiers: INTERFACE,
        supertypes: &[ITERABLE],
    },
    Builtin {
        name: LIST,
        modifiers: INTERFACE,
        supertypes: &[COLLECTION, ITERABLE],
    },
    Builtin {
        name: SET,
        modifiers: INTERFACE,
        supertypes: &[COLLECTION, ITERABLE],
    },
    Builtin {
        name: "java.util.SortedSet",
        modifiers: INTERFACE,
        supertypes: &[SET, COLLECTION, ITERABLE],
    },
    Builtin {
        name: "java.util.Queue",
        modifiers: INTERFACE,
        supertypes: &[COLLECTION, ITERABLE],
    },
    Builtin {
        name: "java.util.ArrayList",
        modifiers: CLASS,
        supertypes: &[
            "java.util.AbstractList",
            "java.util.AbstractCollection",
            LIST,
            COLLECTION,
            ITERABLE,
            "java.util.RandomAccess",
            SERIALIZABLE,
        ],
    },
    Builtin {
        name: "java.util.LinkedHashSet",
        modifiers: CLASS,
        supertypes: &[
            "java.util.HashSet",
            "java.util.AbstractSet",
            "java.util.AbstractCollection",
            SET,
            COLLECTION,
            ITERABLE,
            SERIALIZABLE,
        ],
    },
    Builtin {
        name: "java.util.Map",
        modifiers: INTERFACE,
        supertypes: &[],
    },
    Builtin {
        name: COLLECTORS,
        modifiers: FINAL_CLASS,
        supertypes: &[],
    },
    // Container
    Builtin {
        name: "org.springframework.beans.factory.ObjectFactory",
        modifiers: INTERFACE,
        supertypes: &[],
    },
    Builtin {
        name: OBJECT_PROVIDER,
        modifiers: INTERFACE,
        supertypes: &["org.springframework.beans.factory.ObjectFactory", ITERABLE],
    },
    Builtin {
        name: BEAN_FACTORY,
        modifiers: INTERFACE,
        supertypes: &[],
    },
    Builtin {
        name: LISTABLE_BEAN_FACTORY,
        modifiers: INTERFACE,
        supertypes: &[BEAN_FACTORY],
    },
    Builtin {
        name: HIERARCHICAL_BEAN_FACTORY,
        modifiers: INTERFACE,
        supertypes: &[BEAN_FACTORY],
    },
    Builtin {
        name: "org.springframework.beans.factory.config.ConfigurableBeanFactory",
        modifiers: INTERFACE,
        supertypes: &[
            HIERARCHICAL_BEAN_FACTORY,
            BEAN_FACTORY,
            "org.springframework.beans.factory.config.SingletonBeanRegistry",
        ],
    },
    Builtin {
        name: "org.springframework.beans.factory.config.AutowireCapableBeanFactory",
        modifiers: INTERFACE,
        supertypes: &[BEAN_FACTORY],
    },
    Builtin {
        name: CONFIGURABLE_LISTABLE_BEAN_FACTORY,
        modifiers: INTERFACE,
        supertypes: &[
            LISTABLE_BEAN_FACTORY,
            "org.springframework.beans.factory.config.AutowireCapableBeanFactory",
            "org.springframework.beans.factory.config.ConfigurableBeanFactory",
            HIERARCHICAL_BEAN_FACTORY,
            "org.springframework.beans.factory.config.SingletonBeanRegistry",
            BEAN_FACTORY,
        ],
    },
    Builtin {
        name: BEAN_DEFINITION_REGISTRY,
        modifiers: INTERFACE,
        supertypes: &[ALIAS_REGISTRY],
    },
    Builtin {
        name: PROPERTY_RESOLVER,
        modifiers: INTERFACE,
        supertypes: &[],
    },
    Builtin {
        name: ENVIRONMENT,
        modifiers: INTERFACE,
        supertypes: &[PROPERTY_RESOLVER],
    },
    Builtin {
        name: CONFIGURABLE_ENVIRONMENT,
        modifiers: INTERFACE,
        supertypes: &[
            ENVIRONMENT,
            "org.springframework.core.env.ConfigurablePropertyResolver",
            PROPERTY_RESOLVER,
        ],
    },
    Builtin {
        name: "org.springframework.core.env.StandardEnvironment",
        modifiers: CLASS,
        supertypes: &[
            "org.springframework.core.env.AbstractEnvironment",
            CONFIGURABLE_ENVIRONMENT,
            ENVIRONMENT,
            "org.springframework.core.env.ConfigurablePropertyResolver",
            PROPERTY_RESOLVER,
        ],
    },
    Builtin {
        name: APPLICATION_CONTEXT,
        modifiers: INTERFACE,
        supertypes: APPLICATION_CONTEXT_SUPERTYPES,
    },
    Builtin {
        name: CONFIGURABLE_APPLICATION_CONTEXT,
        modifiers: INTERFACE,
        supertypes: &[
            APPLICATION_CONTEXT,
            "org.springframework.core.env.EnvironmentCapable",
            LISTABLE_BEAN_FACTORY,
            HIERARCHICAL_BEAN_FACTORY,
            BEAN_FACTORY,
            "org.springframework.context.MessageSource",
            "org.springframework.context.ApplicationEventPublisher",
            "org.springframework.core.io.support.ResourcePatternResolver",
            "org.springframework.core.io.ResourceLoader",
            "org.springframework.context.Lifecycle",
            "java.io.Closeable",
            "java.lang.AutoCloseable",
        ],
    },
    Builtin {
        name: GENERIC_APPLICATION_CONTEXT,
        modifiers: CLASS,
        supertypes: &[
            "org.springframework.context.support.AbstractApplicationContext",
            "org.springframework.core.io.DefaultResourceLoader",
            CONFIGURABLE_APPLICATION_CONTEXT,
            APPLICATION_CONTEXT,
            BEAN_DEFINITION_REGISTRY,
            ALIAS_REGISTRY,
            "org.springframework.core.env.EnvironmentCapable",
            LISTABLE_BEAN_FACTORY,
            HIERARCHICAL_BEAN_FACTORY,
            BEAN_FACTORY,
            "org.springframework.context.MessageSource",
            "org.springframework.context.ApplicationEventPublisher",
            "org.springframework.core.io.support.ResourcePatternResolver",
            "org.springframework.core.io.ResourceLoader",
            "org.springframework.context.Lifecycle",
            "java.io.Closeable",
            "java.lang.AutoCloseable",
        ],
    },
    Builtin {
        name: SCOPED_OBJECT,
        modifiers: INTERFACE,
        supertypes: &[
            "org.springframework.aop.RawTargetAccess",
            "org.springframework.aop.framework.AopInfrastructureBean",
        ],
    },
    Builtin {
        name: RESOLVABLE_TYPE,
        modifiers: CLASS,
        supertypes: &[SERIALIZABLE],
    },
    Builtin {
        name: ROOT_BEAN_DEFINITION,
        modifiers: CLASS,
        supertypes: &[
            "org.springframework.beans.factory.support.AbstractBeanDefinition",
            "org.springframework.beans.factory.config.BeanDefinition",
        ],
    },
    Builtin {
        name: BEAN_DEFINITION_CUSTOMIZERS,
        modifiers: ABSTRACT_CLASS,
        supertypes: &[],
    },
    Builtin {
        name: EXCEPTION_HANDLER,
        modifiers: FINAL_CLASS,
        supertypes: &[],
    },
];

/// Look up the built-in facts for a type, if any.
pub fn builtin(name: &TypeName) -> Option<&'static Builtin> {
    let binary = name.binary_name();
    BUILTINS.iter().find(|builtin| builtin.name == binary)
}

#[cfg(test)]
mod tests;
