/// Build the fixed extraction prompt embedding the input text verbatim
///
/// The prompt asks for one of two target shapes (`orden` with
/// cliente+items, `ingreso` with proveedor+items) or the `desconocido`
/// fallback, with prices as bare numbers and totals computed when
/// possible.
pub(crate) fn build_prompt(text: &str) -> String {
    format!(
        r#"Analiza el siguiente texto y extrae TODA la información disponible.

Si es un pedido de cliente, devuelve un JSON con:
{{
  "tipo": "orden",
  "cliente": "nombre del cliente",
  "items": [{{
    "producto": "nombre del producto",
    "cantidad": número,
    "unidad": "cajones/kilos/unidades/etc",
    "precio_unitario": precio por unidad (si se menciona),
    "precio_total": cantidad × precio_unitario (si se puede calcular)
  }}]
}}

Si es un ingreso de mercadería, devuelve:
{{
  "tipo": "ingreso",
  "proveedor": "nombre del proveedor",
  "items": [{{
    "producto": "nombre del producto",
    "cantidad": número,
    "unidad": "cajones/kilos/unidades/etc",
    "precio_unitario": precio por unidad (si se menciona),
    "precio_total": cantidad × precio_unitario (si se puede calcular)
  }}]
}}

Si no entiendes el texto, devuelve: {{"tipo": "desconocido"}}

IMPORTANTE:
- Si se menciona un precio, siempre inclúyelo como número sin símbolos ($)
- Calcula precio_total = cantidad × precio_unitario cuando sea posible
- Si no se menciona precio, omite los campos precio_unitario y precio_total

Texto a analizar: '{text}'

Responde SOLO con el JSON, sin explicaciones."#
    )
}
