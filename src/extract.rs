//! Member extraction: turn type metadata into documentable members.
//!
//! Signatures are rendered the way the member would be declared in source,
//! because the comment miner uses them to find the declaration line.

use crate::model::*;

/// Name prefixes of compiler-generated property accessors.
const ACCESSOR_PREFIXES: &[&str] = &["get_", "set_"];

/// List the fields, then properties, then methods of `ty`, each group in
/// provider order.
pub fn extract_members(ty: &TypeMeta) -> Vec<MemberDoc> {
    let mut members = Vec::with_capacity(ty.fields.len() + ty.properties.len() + ty.methods.len());

    for field in &ty.fields {
        members.push(MemberDoc {
            kind: MemberKind::Field,
            title: field.name.clone(),
            signature: field_signature(field),
            summary: String::new(),
            params: Vec::new(),
        });
    }

    for property in &ty.properties {
        members.push(MemberDoc {
            kind: MemberKind::Property,
            title: property.name.clone(),
            signature: property_signature(property),
            summary: String::new(),
            params: Vec::new(),
        });
    }

    for method in ty.methods.iter().filter(|m| !is_accessor(&m.name)) {
        members.push(MemberDoc {
            kind: MemberKind::Method,
            title: method.name.clone(),
            signature: method_signature(method),
            summary: String::new(),
            params: method
                .parameters
                .iter()
                .map(|p| ParamDoc::new(p.name.clone(), p.ty.clone()))
                .collect(),
        });
    }

    members
}

fn is_accessor(name: &str) -> bool {
    ACCESSOR_PREFIXES.iter().any(|p| name.starts_with(p))
}

fn modifiers(visibility: Visibility, is_static: bool) -> String {
    if is_static {
        format!("{visibility} static")
    } else {
        visibility.to_string()
    }
}

/// `public static int Count`
pub fn field_signature(field: &FieldMeta) -> String {
    format!(
        "{} {} {}",
        modifiers(field.visibility, field.is_static),
        field.ty.name,
        field.name
    )
}

/// `public float Speed { public get; private set; }`
///
/// The leading visibility is the getter's, or the setter's for set-only properties.
pub fn property_signature(property: &PropertyMeta) -> String {
    let mut accessors = String::new();
    if let Some(vis) = property.getter {
        accessors.push_str(&format!(" {vis} get;"));
    }
    if let Some(vis) = property.setter {
        accessors.push_str(&format!(" {vis} set;"));
    }

    let head = match property.getter.or(property.setter) {
        Some(vis) => format!("{vis} {} {}", property.ty.name, property.name),
        None => format!("{} {}", property.ty.name, property.name),
    };
    format!("{head} {{{accessors} }}")
}

/// `private static void Spawn(Vector2 position, float angle)`
pub fn method_signature(method: &MethodMeta) -> String {
    let params = method
        .parameters
        .iter()
        .map(|p| format!("{} {}", p.ty.name, p.name))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} {} {}({})",
        modifiers(method.visibility, method.is_static),
        method.return_type.name,
        method.name,
        params
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, ty: &str, visibility: Visibility, is_static: bool) -> FieldMeta {
        FieldMeta {
            name: name.to_string(),
            ty: TypeRef::simple(ty),
            visibility,
            is_static,
        }
    }

    fn method(name: &str, params: &[(&str, &str)]) -> MethodMeta {
        MethodMeta {
            name: name.to_string(),
            return_type: TypeRef::simple("int"),
            visibility: Visibility::Public,
            is_static: false,
            parameters: params
                .iter()
                .map(|(ty, name)| ParamMeta {
                    name: name.to_string(),
                    ty: TypeRef::simple(ty),
                })
                .collect(),
        }
    }

    #[test]
    fn field_signatures() {
        assert_eq!(
            field_signature(&field("speed", "float", Visibility::Private, false)),
            "private float speed"
        );
        assert_eq!(
            field_signature(&field("Count", "int", Visibility::Public, true)),
            "public static int Count"
        );
    }

    #[test]
    fn method_signature_joins_params_without_trailing_separator() {
        assert_eq!(
            method_signature(&method("Add", &[("int", "a"), ("int", "b")])),
            "public int Add(int a, int b)"
        );
        assert_eq!(method_signature(&method("Tick", &[])), "public int Tick()");
    }

    #[test]
    fn static_method_signature() {
        let mut m = method("Spawn", &[("Vector2", "at")]);
        m.is_static = true;
        m.visibility = Visibility::Internal;
        m.return_type = TypeRef::simple("void");
        assert_eq!(method_signature(&m), "internal static void Spawn(Vector2 at)");
    }

    #[test]
    fn property_signatures() {
        let mut p = PropertyMeta {
            name: "Health".to_string(),
            ty: TypeRef::simple("int"),
            getter: Some(Visibility::Public),
            setter: Some(Visibility::Private),
        };
        assert_eq!(
            property_signature(&p),
            "public int Health { public get; private set; }"
        );

        p.setter = None;
        assert_eq!(property_signature(&p), "public int Health { public get; }");

        p.getter = None;
        p.setter = Some(Visibility::Protected);
        assert_eq!(
            property_signature(&p),
            "protected int Health { protected set; }"
        );
    }

    #[test]
    fn extraction_order_and_accessor_filter() {
        let ty = TypeMeta {
            name: "Player".to_string(),
            full_name: TypeId::from("Game.Player"),
            fields: vec![
                field("b", "int", Visibility::Private, false),
                field("a", "int", Visibility::Public, true),
            ],
            properties: vec![PropertyMeta {
                name: "Health".to_string(),
                ty: TypeRef::simple("int"),
                getter: Some(Visibility::Public),
                setter: None,
            }],
            methods: vec![
                method("get_Health", &[]),
                method("Move", &[("float", "dx")]),
                method("set_Health", &[("int", "value")]),
                method("Attack", &[]),
            ],
        };

        let members = extract_members(&ty);
        let titles: Vec<_> = members.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["b", "a", "Health", "Move", "Attack"]);

        let kinds: Vec<_> = members.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            [
                MemberKind::Field,
                MemberKind::Field,
                MemberKind::Property,
                MemberKind::Method,
                MemberKind::Method
            ]
        );

        assert_eq!(members[3].params.len(), 1);
        assert_eq!(members[3].params[0].name, "dx");
        assert!(members[3].params[0].description.is_empty());
        assert!(members[3].params[0].link.is_none());
        assert!(members.iter().all(|m| m.summary.is_empty()));
    }
}
