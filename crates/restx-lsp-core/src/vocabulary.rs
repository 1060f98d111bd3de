//! Built-in RESTx vocabulary, one builder per category

use crate::completion::{CompletionEntry, CompletionKind};

use CompletionKind::{EnumMember, Function, Keyword, Method, TypeRef, Variable};

pub(crate) fn keywords() -> Vec<CompletionEntry> {
    vec![
        CompletionEntry::new(
            "api",
            Keyword,
            "API declaration",
            "Declares the API name and version.\n\nExample:\n```restx\napi MyAPI 1.0.0\n```",
        ),
        CompletionEntry::new(
            "env",
            Keyword,
            "Environment configuration",
            "Defines environment variables.\n\nExample:\n```restx\nenv {\n  database_url: str\n  api_key: secret\n}\n```",
        ),
        CompletionEntry::new(
            "error",
            Keyword,
            "Error schema",
            "Defines global error response structure.\n\nExample:\n```restx\nerror {\n  code: int\n  message: str\n}\n```",
        ),
        CompletionEntry::new(
            "type",
            Keyword,
            "Type definition",
            "Defines a custom type.\n\nExample:\n```restx\ntype User {\n  id: uuid\n  name: str\n}\n```",
        ),
        CompletionEntry::new(
            "table",
            Keyword,
            "Database table",
            "Defines a database table.\n\nExample:\n```restx\ntable users {\n  id: uuid pk\n  email: email unique\n}\n```",
        ),
        CompletionEntry::new(
            "integration",
            Keyword,
            "External integration",
            "Configures an external API integration.\n\nExample:\n```restx\nintegration stripe {\n  baseUrl: \"https://api.stripe.com\"\n  auth: bearer($env.stripe_key)\n}\n```",
        ),
        CompletionEntry::new(
            "webhook",
            Keyword,
            "Webhook definition",
            "Defines an outbound webhook.\n\nExample:\n```restx\nwebhook user.created {\n  url: \"https://hooks.example.com\"\n  events: [\"user.created\"]\n}\n```",
        ),
        CompletionEntry::new(
            "hook",
            Keyword,
            "Middleware hook",
            "Defines middleware.\n\nExample:\n```restx\nhook logging {\n  before: { ... }\n  after: { ... }\n}\n```",
        ),
        CompletionEntry::new(
            "task",
            Keyword,
            "Scheduled task",
            "Defines a scheduled task.\n\nExample:\n```restx\ntask cleanup @cron(\"0 0 * * *\") {\n  flow: { ... }\n}\n```",
        ),
        CompletionEntry::new(
            "flow",
            Keyword,
            "Flow block",
            "Defines request handling logic.\n\nExample:\n```restx\nflow: {\n  user -> db.users.findById(id)\n  return -> user\n}\n```",
        ),
        CompletionEntry::new(
            "auth",
            Keyword,
            "Authentication",
            "Specifies authentication method.\n\nOptions: `bearer`, `basic`, `apiKey`, `none`",
        ),
        CompletionEntry::new(
            "authorize",
            Keyword,
            "Authorisation",
            "Specifies authorisation expression.\n\nExample:\n```restx\nauthorize: $auth.role == \"admin\"\n```",
        ),
        CompletionEntry::new(
            "return",
            Keyword,
            "Return statement",
            "Returns a value from a flow.\n\nExample:\n```restx\nreturn -> user\n```",
        ),
        CompletionEntry::new(
            "throw",
            Keyword,
            "Throw error",
            "Throws an HTTP error.\n\nExample:\n```restx\nthrow 404\nthrow 400 \"Invalid input\"\n```",
        ),
        CompletionEntry::new(
            "for",
            Keyword,
            "For loop",
            "Iterates over a collection.\n\nExample:\n```restx\nfor item in items { ... }\n```",
        ),
        CompletionEntry::new(
            "match",
            Keyword,
            "Pattern matching",
            "Pattern matching expression.\n\nExample:\n```restx\nmatch result {\n  Success: { ... }\n  Error: { ... }\n}\n```",
        ),
    ]
}

pub(crate) fn http_methods() -> Vec<CompletionEntry> {
    vec![
        CompletionEntry::new(
            "GET",
            Method,
            "HTTP GET",
            "Defines a GET endpoint.\n\nExample:\n```restx\nGET /users/:id -> User\n```",
        ),
        CompletionEntry::new(
            "POST",
            Method,
            "HTTP POST",
            "Defines a POST endpoint.\n\nExample:\n```restx\nPOST /users { body: CreateUser } -> User\n```",
        ),
        CompletionEntry::new(
            "PUT",
            Method,
            "HTTP PUT",
            "Defines a PUT endpoint.\n\nExample:\n```restx\nPUT /users/:id { body: UpdateUser } -> User\n```",
        ),
        CompletionEntry::new(
            "PATCH",
            Method,
            "HTTP PATCH",
            "Defines a PATCH endpoint.\n\nExample:\n```restx\nPATCH /users/:id { body: PatchUser } -> User\n```",
        ),
        CompletionEntry::new(
            "DELETE",
            Method,
            "HTTP DELETE",
            "Defines a DELETE endpoint.\n\nExample:\n```restx\nDELETE /users/:id -> void\n```",
        ),
    ]
}

pub(crate) fn types() -> Vec<CompletionEntry> {
    vec![
        CompletionEntry::new("str", TypeRef, "String type", "Unicode string"),
        CompletionEntry::new("int", TypeRef, "Integer type", "32-bit signed integer"),
        CompletionEntry::new("long", TypeRef, "Long type", "64-bit signed integer"),
        CompletionEntry::new("float", TypeRef, "Float type", "32-bit floating point"),
        CompletionEntry::new("double", TypeRef, "Double type", "64-bit floating point"),
        CompletionEntry::new("bool", TypeRef, "Boolean type", "true or false"),
        CompletionEntry::new("date", TypeRef, "Date type", "Calendar date (ISO 8601)"),
        CompletionEntry::new(
            "datetime",
            TypeRef,
            "DateTime type",
            "Date and time (ISO 8601)",
        ),
        CompletionEntry::new("time", TypeRef, "Time type", "Time of day (ISO 8601)"),
        CompletionEntry::new("timestamp", TypeRef, "Timestamp type", "Database timestamp"),
        CompletionEntry::new("email", TypeRef, "Email type", "Email address (RFC 5322)"),
        CompletionEntry::new("uri", TypeRef, "URI type", "URI reference (RFC 3986)"),
        CompletionEntry::new("url", TypeRef, "URL type", "URL (RFC 3986)"),
        CompletionEntry::new("uuid", TypeRef, "UUID type", "UUID (RFC 4122)"),
        CompletionEntry::new("binary", TypeRef, "Binary type", "Binary data (Base64)"),
        CompletionEntry::new(
            "secret",
            TypeRef,
            "Secret type",
            "Sensitive data (auto-stripped from responses)",
        ),
        CompletionEntry::new("any", TypeRef, "Any type", "Any JSON value"),
        CompletionEntry::new("void", TypeRef, "Void type", "No return value"),
        CompletionEntry::new("text", TypeRef, "Text type", "Long text (database)"),
        CompletionEntry::new("json", TypeRef, "JSON type", "JSON column (database)"),
        CompletionEntry::new(
            "jsonb",
            TypeRef,
            "JSONB type",
            "Binary JSON column (database)",
        ),
        CompletionEntry::new(
            "decimal",
            TypeRef,
            "Decimal type",
            "Decimal with precision. Usage: decimal(10,2)",
        ),
        CompletionEntry::new("bigint", TypeRef, "BigInt type", "Large integer (database)"),
    ]
}

pub(crate) fn modifiers() -> Vec<CompletionEntry> {
    vec![
        CompletionEntry::new("pk", Keyword, "Primary key", "Marks column as primary key"),
        CompletionEntry::new(
            "unique",
            Keyword,
            "Unique constraint",
            "Marks column as unique",
        ),
        CompletionEntry::new(
            "default",
            Keyword,
            "Default value",
            "Sets default value. Usage: `= value`",
        ),
    ]
}

pub(crate) fn annotations() -> Vec<CompletionEntry> {
    vec![
        CompletionEntry::new(
            "@min",
            Function,
            "Minimum constraint",
            "Minimum value/length.\n\nExample: `@min(0)`, `@min(3)`",
        )
        .with_insert_text("@min(${1:value})"),
        CompletionEntry::new(
            "@max",
            Function,
            "Maximum constraint",
            "Maximum value/length.\n\nExample: `@max(100)`, `@max(255)`",
        )
        .with_insert_text("@max(${1:value})"),
        CompletionEntry::new(
            "@pattern",
            Function,
            "Regex pattern",
            "Regex pattern constraint.\n\nExample: `@pattern(\"^[a-z]+$\")`",
        )
        .with_insert_text("@pattern(\"${1:regex}\")"),
        CompletionEntry::new(
            "@unique",
            Function,
            "Unique constraint",
            "Marks field as unique",
        ),
        CompletionEntry::new(
            "@index",
            Function,
            "Database index",
            "Creates database index.\n\nExample: `@index(column1, column2)`",
        )
        .with_insert_text("@index(${1:columns})"),
        CompletionEntry::new(
            "@cache",
            Function,
            "Cache annotation",
            "Enables caching.\n\nExample: `@cache(ttl: 5m)`",
        )
        .with_insert_text("@cache(ttl: ${1:5m})"),
        CompletionEntry::new(
            "@cron",
            Function,
            "Cron schedule",
            "Cron expression for scheduled tasks.\n\nExample: `@cron(\"0 0 * * *\")`",
        )
        .with_insert_text("@cron(\"${1:0 0 * * *}\")"),
        CompletionEntry::new(
            "@transaction",
            Function,
            "Transaction annotation",
            "Wraps flow in a database transaction",
        ),
        CompletionEntry::new(
            "@retry",
            Function,
            "Retry annotation",
            "Retry on failure.\n\nExample: `@retry(3)`",
        )
        .with_insert_text("@retry(${1:3})"),
    ]
}

pub(crate) fn builtin_functions() -> Vec<CompletionEntry> {
    vec![
        CompletionEntry::new(
            "now()",
            Function,
            "Current timestamp",
            "Returns current date/time",
        )
        .with_insert_text("now()"),
        CompletionEntry::new("uuid()", Function, "Generate UUID", "Generates a new UUID")
            .with_insert_text("uuid()"),
        CompletionEntry::new(
            "hash",
            Function,
            "Hash function",
            "Hashes a value (for passwords).\n\nExample: `hash(password)`",
        )
        .with_insert_text("hash(${1:value})"),
        CompletionEntry::new(
            "verify",
            Function,
            "Verify hash",
            "Verifies a value against a hash.\n\nExample: `verify(password, hash)`",
        )
        .with_insert_text("verify(${1:value}, ${2:hash})"),
        CompletionEntry::new(
            "jwt.sign",
            Function,
            "Sign JWT",
            "Signs a JWT token.\n\nExample: `jwt.sign(payload, secret)`",
        )
        .with_insert_text("jwt.sign(${1:payload}, ${2:secret})"),
        CompletionEntry::new(
            "jwt.verify",
            Function,
            "Verify JWT",
            "Verifies a JWT token.\n\nExample: `jwt.verify(token, secret)`",
        )
        .with_insert_text("jwt.verify(${1:token}, ${2:secret})"),
        CompletionEntry::new(
            "random.token",
            Function,
            "Random token",
            "Generates a random token.\n\nExample: `random.token(32)`",
        )
        .with_insert_text("random.token(${1:32})"),
        CompletionEntry::new(
            "random.string",
            Function,
            "Random string",
            "Generates a random string.\n\nExample: `random.string(8, \"ABC123\")`",
        )
        .with_insert_text("random.string(${1:length}, ${2:charset})"),
        CompletionEntry::new("log.info", Function, "Log info", "Logs an info message")
            .with_insert_text("log.info(${1:message})"),
        CompletionEntry::new("log.error", Function, "Log error", "Logs an error message")
            .with_insert_text("log.error(${1:message})"),
        CompletionEntry::new(
            "email.send",
            Function,
            "Send email",
            "Sends an email.\n\nExample: `email.send(to, template, data)`",
        )
        .with_insert_text("email.send(${1:to}, ${2:template}, ${3:data})"),
        CompletionEntry::new(
            "cache.get",
            Function,
            "Get from cache",
            "Gets a value from cache",
        )
        .with_insert_text("cache.get(${1:key})"),
        CompletionEntry::new(
            "cache.set",
            Function,
            "Set in cache",
            "Sets a value in cache",
        )
        .with_insert_text("cache.set(${1:key}, ${2:value})"),
        CompletionEntry::new(
            "cache.invalidate",
            Function,
            "Invalidate cache",
            "Invalidates cache keys",
        )
        .with_insert_text("cache.invalidate(${1:pattern})"),
        CompletionEntry::new(
            "webhook.emit",
            Function,
            "Emit webhook",
            "Emits a webhook event.\n\nExample: `webhook.emit(\"user.created\", data)`",
        )
        .with_insert_text("webhook.emit(${1:event}, ${2:data})"),
    ]
}

pub(crate) fn db_operations() -> Vec<CompletionEntry> {
    vec![
        CompletionEntry::new(
            "findById",
            Method,
            "Find by ID",
            "Finds a record by primary key.\n\nExample: `db.users.findById(id)`",
        )
        .with_insert_text("findById(${1:id})"),
        CompletionEntry::new(
            "where",
            Method,
            "Where clause",
            "Filters records.\n\nExample: `db.users.where(email == value)`",
        )
        .with_insert_text("where(${1:condition})"),
        CompletionEntry::new(
            "first",
            Method,
            "First record",
            "Returns first matching record",
        )
        .with_insert_text("first()"),
        CompletionEntry::new("all", Method, "All records", "Returns all matching records")
            .with_insert_text("all()"),
        CompletionEntry::new(
            "insert",
            Method,
            "Insert record",
            "Inserts a new record.\n\nExample: `db.users.insert({ email: value })`",
        )
        .with_insert_text("insert(${1:data})"),
        CompletionEntry::new(
            "update",
            Method,
            "Update record",
            "Updates a record.\n\nExample: `db.users.update(id, { name: value })`",
        )
        .with_insert_text("update(${1:id}, ${2:data})"),
        CompletionEntry::new(
            "delete",
            Method,
            "Delete record",
            "Deletes a record.\n\nExample: `db.users.delete(id)`",
        )
        .with_insert_text("delete(${1:id})"),
        CompletionEntry::new(
            "upsert",
            Method,
            "Upsert record",
            "Inserts or updates a record.\n\nExample: `db.users.upsert(data, on: \"email\")`",
        )
        .with_insert_text("upsert(${1:data}, on: ${2:key})"),
        CompletionEntry::new("count", Method, "Count records", "Counts matching records")
            .with_insert_text("count()"),
        CompletionEntry::new(
            "sum",
            Method,
            "Sum values",
            "Sums a column.\n\nExample: `db.orders.sum(total)`",
        )
        .with_insert_text("sum(${1:column})"),
        CompletionEntry::new("avg", Method, "Average values", "Averages a column")
            .with_insert_text("avg(${1:column})"),
        CompletionEntry::new(
            "paginate",
            Method,
            "Paginate results",
            "Paginates results.\n\nExample: `db.users.paginate(page, per_page)`",
        )
        .with_insert_text("paginate(${1:page}, ${2:per_page})"),
        CompletionEntry::new(
            "orderBy",
            Method,
            "Order by",
            "Orders results.\n\nExample: `db.users.orderBy(created_at, desc)`",
        )
        .with_insert_text("orderBy(${1:column}, ${2:asc})"),
        CompletionEntry::new("limit", Method, "Limit results", "Limits number of results")
            .with_insert_text("limit(${1:count})"),
        CompletionEntry::new(
            "include",
            Method,
            "Include relations",
            "Includes related records.\n\nExample: `db.users.findById(id).include(orders)`",
        )
        .with_insert_text("include(${1:relation})"),
        CompletionEntry::new(
            "query",
            Method,
            "Raw SQL query",
            "Executes raw SQL.\n\nExample: `db.query(\\`SELECT * FROM users\\`)`",
        )
        .with_insert_text("query(`${1:sql}`)"),
    ]
}

pub(crate) fn magic_variables() -> Vec<CompletionEntry> {
    vec![
        CompletionEntry::new(
            "$auth",
            Variable,
            "Auth context",
            "Authenticated user context.\n\nProperties: `id`, `role`, `email`, etc.",
        ),
        CompletionEntry::new(
            "$auth.id",
            Variable,
            "Auth user ID",
            "Authenticated user ID",
        ),
        CompletionEntry::new(
            "$auth.role",
            Variable,
            "Auth user role",
            "Authenticated user role",
        ),
        CompletionEntry::new(
            "$request",
            Variable,
            "Request context",
            "HTTP request context.\n\nProperties: `method`, `path`, `headers`, `ip`",
        ),
        CompletionEntry::new(
            "$request.headers",
            Variable,
            "Request headers",
            "HTTP request headers",
        ),
        CompletionEntry::new("$request.ip", Variable, "Request IP", "Client IP address"),
        CompletionEntry::new(
            "$response",
            Variable,
            "Response context",
            "HTTP response context.\n\nProperties: `status`, `headers`",
        ),
        CompletionEntry::new(
            "$query",
            Variable,
            "Query parameters",
            "URL query parameters",
        ),
        CompletionEntry::new(
            "$env",
            Variable,
            "Environment",
            "Environment variables.\n\nUsage: `$env.variable_name`",
        ),
    ]
}

pub(crate) fn auth_types() -> Vec<CompletionEntry> {
    vec![
        CompletionEntry::new(
            "bearer",
            EnumMember,
            "Bearer token",
            "JWT Bearer token authentication",
        ),
        CompletionEntry::new(
            "basic",
            EnumMember,
            "Basic auth",
            "HTTP Basic authentication",
        ),
        CompletionEntry::new("apiKey", EnumMember, "API Key", "API Key authentication"),
        CompletionEntry::new("none", EnumMember, "No auth", "No authentication required"),
    ]
}
