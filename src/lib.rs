pub mod api;
pub mod ast;
pub mod dispatcher;
pub mod error;
pub mod generators;
pub mod markup;
pub mod mock;
pub mod options;
pub mod props;
pub mod resolver;
pub mod utils;

pub use api::{generate, generate_file, parse_module, parse_page};
pub use ast::{
    FieldGenerator, FieldSpec, FieldType, GeneratorOutput, MockDataSchema, ModuleType, PageOutput,
    UiCommon, UiDataSource, UiModule,
};
pub use dispatcher::{generate_module, generate_page};
pub use error::UiDslError;
pub use mock::{generate_mock_data, MockSynthesizer};
pub use options::GeneratorOptions;
pub use resolver::{resolve_data_source, resolve_data_source_with};
