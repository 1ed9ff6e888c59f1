// Kept in step with `CREATE_FERIADOS_TABLE` in `db/mod.rs`.

diesel::table! {
    feriados (id) {
        id -> Int4,
        nombre_feriado -> Text,
        fecha -> Date,
        tipo -> Text,
        #[sql_name = "descripción"]
        descripcion -> Text,
        dia_semana -> Text,
    }
}
